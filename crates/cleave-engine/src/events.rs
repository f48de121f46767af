//! Ready-made [`RevealSink`] implementations.
//!
//! A `Vec<RevealEvent>` already works as a sink. [`NullSink`] discards
//! everything, and [`ChannelSink`] forwards events to another thread
//! over a bounded channel without ever blocking the tick.

use crossbeam_channel::{Receiver, Sender, TrySendError};

use cleave_core::{RevealEvent, RevealSink};

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RevealSink for NullSink {
    fn emit(&mut self, _event: RevealEvent) {}
}

/// Forwards events over a crossbeam channel.
///
/// Sends never block: when the channel is full or the receiver is gone
/// the event is dropped and counted.
#[derive(Debug)]
pub struct ChannelSink {
    tx: Sender<RevealEvent>,
    dropped: u64,
    dropping: bool,
}

impl ChannelSink {
    /// Wrap an existing sender.
    pub fn new(tx: Sender<RevealEvent>) -> Self {
        Self {
            tx,
            dropped: 0,
            dropping: false,
        }
    }

    /// A sink and its receiving end, buffering up to `capacity` events.
    pub fn bounded(capacity: usize) -> (Self, Receiver<RevealEvent>) {
        let (tx, rx) = crossbeam_channel::bounded(capacity);
        (Self::new(tx), rx)
    }

    /// Events dropped so far.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl RevealSink for ChannelSink {
    fn emit(&mut self, event: RevealEvent) {
        match self.tx.try_send(event) {
            Ok(()) => self.dropping = false,
            Err(e) => {
                self.dropped += 1;
                // One warning per run of drops.
                if !self.dropping {
                    let reason = match e {
                        TrySendError::Full(_) => "channel full",
                        TrySendError::Disconnected(_) => "receiver gone",
                    };
                    log::warn!(
                        "reveal event dropped ({reason}); {} dropped so far",
                        self.dropped
                    );
                }
                self.dropping = true;
            }
        }
    }
}
