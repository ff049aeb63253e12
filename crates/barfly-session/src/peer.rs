//! Outbound side of a connection as seen by the registry.

use std::ops::AddAssign;
use std::sync::Arc;

use barfly_transport::ConnectionId;
use tokio::sync::mpsc;

/// An encoded text frame, shared between every recipient of a fan-out.
pub type Frame = Arc<str>;

/// Channel into a connection's writer task.
pub type PeerSender = mpsc::UnboundedSender<Frame>;

/// A live connection's identity plus the channel its frames go to.
///
/// The registry only holds this handle; the socket itself belongs to the
/// connection's handler task.
#[derive(Debug, Clone)]
pub struct Peer {
    id: ConnectionId,
    sender: PeerSender,
}

impl Peer {
    pub fn new(id: ConnectionId, sender: PeerSender) -> Self {
        Self { id, sender }
    }

    /// Creates a peer together with the receiving end of its channel.
    pub fn channel(id: ConnectionId) -> (Self, mpsc::UnboundedReceiver<Frame>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(id, tx), rx)
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn sender(&self) -> &PeerSender {
        &self.sender
    }

    /// Queues a frame. Returns `false` if the writer is gone.
    pub fn send(&self, frame: Frame) -> bool {
        self.sender.send(frame).is_ok()
    }
}

/// Result of a best-effort fan-out.
///
/// A skipped delivery means the target's writer had already shut down;
/// it never stops delivery to the remaining targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: usize,
    pub skipped: usize,
}

impl DeliveryReport {
    pub fn attempted(&self) -> usize {
        self.delivered + self.skipped
    }

    pub(crate) fn record(&mut self, ok: bool) {
        if ok {
            self.delivered += 1;
        } else {
            self.skipped += 1;
        }
    }
}

impl AddAssign for DeliveryReport {
    fn add_assign(&mut self, rhs: Self) {
        self.delivered += rhs.delivered;
        self.skipped += rhs.skipped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peer_send_reports_closed_writer() {
        let (peer, rx) = Peer::channel(ConnectionId::new(1));
        assert!(peer.send(Frame::from("a")));
        drop(rx);
        assert!(!peer.send(Frame::from("b")));
    }

    #[test]
    fn test_delivery_report_accumulates() {
        let mut total = DeliveryReport::default();
        total += DeliveryReport { delivered: 2, skipped: 1 };
        total += DeliveryReport { delivered: 1, skipped: 0 };
        assert_eq!(total, DeliveryReport { delivered: 3, skipped: 1 });
        assert_eq!(total.attempted(), 4);
    }
}
