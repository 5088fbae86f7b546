pub mod app;
pub mod components;
pub mod confirm;
pub mod format;
pub mod layout;
pub mod notifications;
pub mod screen;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::{App, Focus, ModalState};
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
