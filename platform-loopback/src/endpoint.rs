//! Shared state for one side of a loopback pairing.

use futures::channel::mpsc;
use platform_traits::ReceivedMessage;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::DuplexStream;
use tokio::sync::{mpsc as channel_queue, Mutex as AsyncMutex};
use uuid::Uuid;

/// Rendezvous queue for inbound byte channels on one path.
///
/// The sending half lives in the same struct, so the queue never closes
/// while the endpoint is alive; concurrent receivers take channels in
/// arrival order.
struct PathQueue {
    tx: channel_queue::UnboundedSender<DuplexStream>,
    rx: AsyncMutex<channel_queue::UnboundedReceiver<DuplexStream>>,
}

impl PathQueue {
    fn new() -> Self {
        let (tx, rx) = channel_queue::unbounded_channel();
        Self {
            tx,
            rx: AsyncMutex::new(rx),
        }
    }
}

/// One side of a loopback pairing.
///
/// Owned by its platform through an `Arc`; the paired platform only holds
/// a `Weak`, so dropping a platform tears its endpoint down and ends every
/// stream subscribed to it.
pub(crate) struct Endpoint {
    pub(crate) node_id: String,
    pub(crate) display_name: String,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<ReceivedMessage>>>,
    channels: Mutex<HashMap<String, Arc<PathQueue>>>,
}

impl Endpoint {
    pub(crate) fn new(display_name: String) -> Self {
        Self {
            node_id: Uuid::new_v4().to_string(),
            display_name,
            subscribers: Mutex::new(Vec::new()),
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Registers a new message subscriber.
    pub(crate) fn subscribe(&self) -> mpsc::UnboundedReceiver<ReceivedMessage> {
        let (tx, rx) = mpsc::unbounded();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }

    /// Delivers a message to every live subscriber, pruning closed ones.
    pub(crate) fn deliver(&self, message: ReceivedMessage) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.unbounded_send(message.clone()).is_ok());
    }

    /// Hands an inbound byte channel to whoever receives on `path`.
    pub(crate) fn offer_channel(&self, path: &str, stream: DuplexStream) {
        let _ = self.queue(path).tx.send(stream);
    }

    /// Takes the next inbound byte channel on `path`, waiting for one to
    /// arrive. Returns `None` only if the queue closed underneath us.
    pub(crate) async fn next_channel(&self, path: &str) -> Option<DuplexStream> {
        let queue = self.queue(path);
        let mut rx = queue.rx.lock().await;
        rx.recv().await
    }

    fn queue(&self, path: &str) -> Arc<PathQueue> {
        let mut channels = self.channels.lock().unwrap();
        Arc::clone(
            channels
                .entry(path.to_string())
                .or_insert_with(|| Arc::new(PathQueue::new())),
        )
    }
}
