//! Viewport resize signal.
//!
//! The host side owns a [`ViewportSignal`] and publishes widths into it. A
//! navigation shell holds a [`ViewportSubscription`] for as long as it is
//! mounted; dropping the shell drops the subscription, which is visible on
//! the host side through [`ViewportSignal::subscriber_count`].

use std::sync::Arc;

use tokio::sync::watch;

/// Publisher of viewport widths.
#[derive(Clone, Debug)]
pub struct ViewportSignal {
    tx: Arc<watch::Sender<f64>>,
}

impl ViewportSignal {
    /// Create a signal holding `initial_width`.
    #[must_use]
    pub fn new(initial_width: f64) -> Self {
        let (tx, _rx) = watch::channel(initial_width);
        Self { tx: Arc::new(tx) }
    }

    /// Publish a new width to every subscriber.
    pub fn publish(&self, width: f64) {
        self.tx.send_replace(width);
    }

    /// Latest published width.
    #[must_use]
    pub fn current(&self) -> f64 {
        *self.tx.borrow()
    }

    /// Acquire a subscription. The current width counts as already seen.
    #[must_use]
    pub fn subscribe(&self) -> ViewportSubscription {
        ViewportSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Receiving end of a [`ViewportSignal`]. Released on drop.
#[derive(Debug)]
pub struct ViewportSubscription {
    rx: watch::Receiver<f64>,
}

impl ViewportSubscription {
    /// Latest width if it changed since the last call.
    ///
    /// Intermediate widths published between two calls are coalesced; only
    /// the most recent one is returned. Returns `None` once the signal is gone.
    pub fn take_changed(&mut self) -> Option<f64> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            Ok(false) | Err(_) => None,
        }
    }
}
