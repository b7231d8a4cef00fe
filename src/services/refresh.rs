use std::sync::{Arc, LazyLock};
use tokio::sync::watch;
use tracing::{debug, info};

static GLOBAL: LazyLock<RefreshSignal> = LazyLock::new(RefreshSignal::new);

/// Process-wide "data changed" signal.
///
/// Holds a monotonically increasing generation. Every mutation calls
/// [`RefreshSignal::trigger`], and every screen that shows product data
/// keeps a [`RefreshSubscription`] and re-fetches when the generation moves.
/// Rapid triggers coalesce: a slow subscriber sees only the latest value.
#[derive(Clone)]
pub struct RefreshSignal {
    sender: Arc<watch::Sender<u64>>,
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshSignal {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// The shared instance used by the desktop app.
    pub fn global() -> &'static RefreshSignal {
        &GLOBAL
    }

    /// Bump the generation and wake every subscriber. Returns the new generation.
    pub fn trigger(&self) -> u64 {
        let mut generation = 0;
        self.sender.send_modify(|g| {
            *g += 1;
            generation = *g;
        });
        info!(
            generation,
            subscribers = self.sender.receiver_count(),
            "Global refresh triggered"
        );
        generation
    }

    pub fn generation(&self) -> u64 {
        *self.sender.borrow()
    }

    pub fn subscribe(&self) -> RefreshSubscription {
        let receiver = self.sender.subscribe();
        debug!(generation = *receiver.borrow(), "Refresh subscriber registered");
        RefreshSubscription { receiver }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Dropping the subscription unregisters it.
pub struct RefreshSubscription {
    receiver: watch::Receiver<u64>,
}

impl RefreshSubscription {
    /// Wait for the next trigger. Returns `None` once the signal is gone.
    pub async fn changed(&mut self) -> Option<u64> {
        self.receiver.changed().await.ok()?;
        let generation = *self.receiver.borrow_and_update();
        debug!(generation, "Refresh callback triggered");
        Some(generation)
    }

    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    pub fn current(&self) -> u64 {
        *self.receiver.borrow()
    }
}
