use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::{endpoint::BoxEndpoint, error::UrlForError, Match, Router};

/// A [`Router`] that can keep taking registrations while it serves matches.
///
/// Registration takes the write lock, matching takes the read lock. Clones
/// share the same table. If all routes are registered before the server
/// starts, share a plain `Arc<Router>` instead.
pub struct SharedRouter<H = BoxEndpoint> {
    inner: Arc<RwLock<Router<H>>>,
}

impl<H> Clone for SharedRouter<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<H> Default for SharedRouter<H> {
    fn default() -> Self {
        Router::new().into()
    }
}

impl<H> From<Router<H>> for SharedRouter<H> {
    fn from(router: Router<H>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(router)),
        }
    }
}

impl<H> SharedRouter<H> {
    /// Create an empty shared router.
    pub fn new() -> Self {
        Default::default()
    }

    /// Runs `f` with exclusive access to the router.
    ///
    /// ```
    /// use stanza::SharedRouter;
    ///
    /// let router = SharedRouter::<u32>::new();
    /// router.register(|r| {
    ///     let mut api = r.group("api");
    ///     api.get("ping", 1);
    /// });
    /// assert!(router.matches("GET", "/api/ping").is_some());
    /// ```
    pub fn register<R>(&self, f: impl FnOnce(&mut Router<H>) -> R) -> R {
        let mut router = self.inner.write();
        f(&mut *router)
    }

    /// Finds the route for `method` and `path`, see [`Router::matches`].
    pub fn matches(&self, method: &str, path: &str) -> Option<Match<H>> {
        self.inner.read().matches(method, path)
    }

    /// Builds the URL of a named route, see [`Router::url_for`].
    pub fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, UrlForError> {
        self.inner.read().url_for(name, params)
    }

    /// Locks the router for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, Router<H>> {
        self.inner.read()
    }
}
