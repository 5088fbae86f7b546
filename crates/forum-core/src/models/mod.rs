pub mod message;
pub mod thread;
pub mod timestamp;

pub use message::{Author, Message};
pub use thread::{sort_newest_first, Thread};
