pub mod dialogs;
pub mod forum;
pub mod messages;
pub mod thread_list;

pub use dialogs::{render_confirm_dialog, render_new_thread_prompt};
pub use forum::{render_backdrop, render_forum};
pub use messages::render_message_pane;
pub use thread_list::render_thread_list;
