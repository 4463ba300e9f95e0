use crate::error::Result;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// One-time, thread-safe lazy holder for an injected model service.
///
/// Model backends are expensive to bring up (weights, sessions, warm-up), so
/// callers construct a handle with a loader closure and share it; the loader
/// runs at most once, concurrent first callers block until it finishes, and
/// a failed load is retried on the next call rather than cached.
pub struct ServiceHandle<T: ?Sized> {
    cell: OnceCell<Arc<T>>,
    init: Box<dyn Fn() -> Result<Arc<T>> + Send + Sync>,
}

impl<T: ?Sized> ServiceHandle<T> {
    /// Create a handle whose service is built by `init` on first use.
    pub fn new(init: impl Fn() -> Result<Arc<T>> + Send + Sync + 'static) -> Self {
        Self {
            cell: OnceCell::new(),
            init: Box::new(init),
        }
    }

    /// Get the service, initializing it on first call.
    pub fn get(&self) -> Result<Arc<T>> {
        self.cell.get_or_try_init(|| (self.init)()).cloned()
    }

    /// Whether the service has been initialized.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: ?Sized> std::fmt::Debug for ServiceHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("ready", &self.is_ready())
            .finish()
    }
}
