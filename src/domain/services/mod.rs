mod conversation;
mod envelope;
mod framer;
pub mod session;
mod sessions;

pub use conversation::*;
pub use envelope::*;
pub use framer::*;
pub use sessions::*;
