use std::fmt::{self, Debug, Formatter};

use crate::{endpoint::BoxEndpoint, Method};

/// A registered route: method + address bound to a handler, an optional
/// name and a middleware chain.
///
/// Routes are immutable once registered. Use [`RouteBuilder`] to set the
/// name and middleware before the method call that registers the route.
///
/// [`RouteBuilder`]: crate::route::RouteBuilder
pub struct Route<H = BoxEndpoint> {
    pub(crate) address: String,
    pub(crate) method: Method,
    pub(crate) handler: H,
    pub(crate) name: Option<String>,
    pub(crate) middleware: Vec<String>,
}

impl<H> Route<H> {
    /// Normalized address, without leading or trailing separators.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Fully-qualified dotted name, including the group namespace.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Middleware identifiers in the order they were added.
    pub fn middleware(&self) -> &[String] {
        &self.middleware
    }
}

impl<H> Debug for Route<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("address", &self.address)
            .field("name", &self.name)
            .field("middleware", &self.middleware)
            .finish()
    }
}
