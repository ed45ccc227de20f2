use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;

use crate::channel::errors::ChannelError;
use crate::channel::notification::Notification;
use crate::solver::Solution;

/// Destination for accepted solutions
pub trait SolutionSink {
    /// # Errors
    ///
    /// Returns an error when the consumer is gone and the search should stop.
    fn accept(&mut self, solution: Solution) -> Result<(), ChannelError>;
}

impl SolutionSink for Vec<Solution> {
    fn accept(&mut self, solution: Solution) -> Result<(), ChannelError> {
        self.push(solution);
        Ok(())
    }
}

/// Sending half of a search's notification stream.
///
/// `finish` consumes the channel, so `Done` is sent at most once and nothing can
/// follow it. Dropping the channel without finishing closes the stream with no
/// `Done`, which is how a cancelled search ends.
#[derive(Debug)]
pub struct ResultChannel {
    sender: Sender<Notification>,
    delivered: usize,
}

impl ResultChannel {
    pub fn new(sender: Sender<Notification>) -> Self {
        Self {
            sender,
            delivered: 0,
        }
    }

    pub fn unbounded() -> (Self, Receiver<Notification>) {
        let (sender, receiver) = unbounded();
        (Self::new(sender), receiver)
    }

    /// Number of solutions sent so far
    pub fn delivered(&self) -> usize {
        self.delivered
    }

    /// # Errors
    ///
    /// Returns an error if the receiver was dropped.
    pub fn finish(self) -> Result<(), ChannelError> {
        debug!("Stream complete after {} solutions", self.delivered);
        self.sender
            .send(Notification::Done)
            .map_err(|_| ChannelError::Disconnected)
    }
}

impl SolutionSink for ResultChannel {
    fn accept(&mut self, solution: Solution) -> Result<(), ChannelError> {
        self.sender
            .send(Notification::from(&solution))
            .map_err(|_| ChannelError::Disconnected)?;
        self.delivered += 1;
        Ok(())
    }
}
