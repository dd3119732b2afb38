//! Forwarding of purchase intents to the caller's handler.

/// Forwards the product reference of a tapped row to the purchase handler.
///
/// The router does not retry, validate or remember anything: each call to
/// [`route`](Self::route) invokes the handler exactly once.
///
/// # Example
///
/// ```rust
/// use purchase_table::PurchaseRouter;
///
/// let (router, intents) = PurchaseRouter::channel();
/// router.route("coins_100");
/// assert_eq!(intents.try_next(), Some("coins_100"));
/// assert_eq!(intents.try_next(), None);
/// ```
pub struct PurchaseRouter<P> {
    handler: Box<dyn Fn(P) + Send + Sync>,
}

impl<P> PurchaseRouter<P> {
    pub fn new(handler: impl Fn(P) + Send + Sync + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }

    pub fn route(&self, product: P) {
        tracing::trace!("routing purchase intent");
        (self.handler)(product);
    }
}

impl<P: Send + 'static> PurchaseRouter<P> {
    /// Create a router that queues product references for the caller to drain.
    ///
    /// Intents are queued in tap order on an unbounded channel, so routing
    /// never blocks the thread that delivered the tap.
    pub fn channel() -> (Self, PurchaseIntents<P>) {
        let (sender, receiver) = flume::unbounded();
        let router = Self::new(move |product| {
            sender.send(product).ok();
        });
        (router, PurchaseIntents(receiver))
    }
}

/// Receiving end of [`PurchaseRouter::channel`].
pub struct PurchaseIntents<P>(flume::Receiver<P>);

impl<P> PurchaseIntents<P> {
    /// Take the oldest queued intent without waiting.
    pub fn try_next(&self) -> Option<P> {
        self.0.try_recv().ok()
    }

    /// Wait for the next intent.
    ///
    /// Resolves to `None` once the router has been dropped and the queue is
    /// empty.
    pub async fn next(&self) -> Option<P> {
        self.0.recv_async().await.ok()
    }

    #[cfg(any(test, feature = "testing"))]
    /// Block the current thread until the next intent arrives.
    ///
    /// Only available with the `testing` feature.
    pub fn next_blocking(&self) -> Option<P> {
        futures::executor::block_on(self.next())
    }

    /// Take every queued intent.
    pub fn drain(&self) -> Vec<P> {
        self.0.try_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
