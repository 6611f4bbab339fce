//! Chat side of the bot: message type, argument parsing, command
//! dispatch and reply formatting.

pub mod args;
pub mod command;
pub mod dispatcher;
pub mod message;
pub mod reply;

pub use command::Command;
pub use dispatcher::Dispatcher;
pub use message::Message;
