//! Delivery of solutions to the caller

mod errors;
mod notification;
mod sink;

pub use errors::ChannelError;
pub use notification::{Control, Notification};
pub use sink::{ResultChannel, SolutionSink};
