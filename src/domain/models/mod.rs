mod backend;
mod catalog;
mod command;
mod message;

pub use backend::*;
pub use catalog::*;
pub use command::*;
pub use message::*;
