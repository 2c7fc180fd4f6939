//! The handler contract.
//!
//! The router never calls a handler. It only stores one per route and hands
//! it back on a match; the surrounding server decides how to invoke it and
//! what to do with the value it returns.

use std::{any::Any, sync::Arc};

/// Gives a handler access to the request that was matched.
pub trait RequestContext {
    /// The original request.
    fn request(&self) -> &http::Request<()>;
}

impl RequestContext for http::Request<()> {
    fn request(&self) -> &http::Request<()> {
        self
    }
}

/// The value a handler produces. Its type is opaque to the router.
pub type Reply = Box<dyn Any + Send>;

/// A request handler.
pub trait Endpoint: Send + Sync + 'static {
    /// Handles the request.
    fn call(&self, ctx: &dyn RequestContext) -> Reply;
}

impl<F, R> Endpoint for F
where
    F: Fn(&dyn RequestContext) -> R + Send + Sync + 'static,
    R: Any + Send,
{
    fn call(&self, ctx: &dyn RequestContext) -> Reply {
        Box::new(self(ctx))
    }
}

/// A shared, type-erased [`Endpoint`].
pub type BoxEndpoint = Arc<dyn Endpoint>;

/// Erases the type of `ep`.
pub fn boxed(ep: impl Endpoint) -> BoxEndpoint {
    Arc::new(ep)
}
