//! Delivery of newly accepted signals to an outside collaborator

use crate::strategy::{Direction, Signal, StrategyKind};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Payload sent once per accepted signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalNotification {
    #[serde(rename = "type")]
    pub signal_type: Direction,
    pub symbol: String,
    pub strategy: StrategyKind,
    pub entry_price: f64,
}

impl From<&Signal> for SignalNotification {
    fn from(signal: &Signal) -> Self {
        Self {
            signal_type: signal.signal_type,
            symbol: signal.symbol.clone(),
            strategy: signal.strategy,
            entry_price: signal.entry_price,
        }
    }
}

/// Receiver of new-signal notifications
pub trait SignalNotifier: Send {
    fn notify(&self, notification: SignalNotification);
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl SignalNotifier for TracingNotifier {
    fn notify(&self, n: SignalNotification) {
        info!(
            "🔔 New {} signal: {} via {} at {}",
            n.signal_type, n.symbol, n.strategy, n.entry_price
        );
    }
}

/// Forwards notifications over an unbounded tokio channel
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::UnboundedSender<SignalNotification>,
}

impl ChannelNotifier {
    pub fn new(sender: mpsc::UnboundedSender<SignalNotification>) -> Self {
        Self { sender }
    }

    /// Create a notifier together with the receiving end of its channel
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SignalNotification>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }
}

impl SignalNotifier for ChannelNotifier {
    fn notify(&self, notification: SignalNotification) {
        if self.sender.send(notification).is_err() {
            warn!("Notification receiver dropped, signal notification lost");
        }
    }
}
