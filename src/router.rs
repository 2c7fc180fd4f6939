use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::{
    endpoint::BoxEndpoint,
    error::UrlForError,
    path::{normalize, param_name, segments, SEPARATOR},
    route::{RouteBuilder, RouteGroup},
    route_recognizer::{Lookup, Trie},
    NameRegistry, Params, Route,
};

const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// The result of a successful [`Router::matches`].
pub struct Match<H = BoxEndpoint> {
    /// The matched route.
    pub route: Arc<Route<H>>,
    /// Values captured by the route's parameter segments.
    pub params: Params,
}

impl<H> Debug for Match<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("route", &self.route)
            .field("params", &self.params)
            .finish()
    }
}

/// Routing table.
///
/// Routes are registered through [`RouteGroup`]s and [`RouteBuilder`]s, then
/// requests are resolved with [`Router::matches`]. A `Router` is meant to be
/// built once at startup and then shared read-only, e.g. behind an [`Arc`];
/// see [`SharedRouter`](crate::SharedRouter) for registering while serving.
///
/// # Example
///
/// ```
/// use stanza::Router;
///
/// let mut router = Router::<&str>::new();
/// router.get("users", "list");
/// router.get("users/active", "active");
/// router.route().name("users.show").get("users/$id", "show");
///
/// let m = router.matches("GET", "/users/42").unwrap();
/// assert_eq!(*m.route.handler(), "show");
/// assert_eq!(&m.params["id"], "42");
///
/// assert_eq!(*router.matches("GET", "/users/active").unwrap().route.handler(), "active");
/// assert!(router.matches("POST", "/users").is_none());
/// assert_eq!(router.url_for("users.show", &[("id", "7")]).unwrap(), "/users/7");
/// ```
pub struct Router<H = BoxEndpoint> {
    trie: Trie<Arc<Route<H>>>,
    names: NameRegistry,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self {
            trie: Trie::default(),
            names: NameRegistry::default(),
        }
    }
}

impl<H> Debug for Router<H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.trie.len())
            .field("names", &self.names)
            .finish()
    }
}

impl<H> Router<H> {
    /// Create a new routing table.
    pub fn new() -> Self {
        Default::default()
    }

    /// Opens a group with the specified prefix.
    pub fn group(&mut self, prefix: &str) -> RouteGroup<'_, H> {
        RouteGroup::new(self, prefix)
    }

    /// Starts a route outside of any group.
    pub fn route(&mut self) -> RouteBuilder<'_, H> {
        RouteBuilder::root(self)
    }

    /// Registers a `GET` route, similar to `self.route().get(address, handler)`.
    pub fn get(&mut self, address: &str, handler: H) -> Arc<Route<H>> {
        self.route().get(address, handler)
    }

    /// Registers a `POST` route, similar to `self.route().post(address, handler)`.
    pub fn post(&mut self, address: &str, handler: H) -> Arc<Route<H>> {
        self.route().post(address, handler)
    }

    /// Registers a `PUT` route, similar to `self.route().put(address, handler)`.
    pub fn put(&mut self, address: &str, handler: H) -> Arc<Route<H>> {
        self.route().put(address, handler)
    }

    /// Registers a `PATCH` route, similar to `self.route().patch(address, handler)`.
    pub fn patch(&mut self, address: &str, handler: H) -> Arc<Route<H>> {
        self.route().patch(address, handler)
    }

    /// Registers a `DELETE` route, similar to `self.route().delete(address, handler)`.
    pub fn delete(&mut self, address: &str, handler: H) -> Arc<Route<H>> {
        self.route().delete(address, handler)
    }

    pub(crate) fn insert(&mut self, route: Route<H>) -> Arc<Route<H>> {
        let route = Arc::new(route);
        tracing::debug!(
            method = %route.method,
            address = %route.address,
            name = ?route.name,
            middleware = ?route.middleware,
            "register route"
        );

        let segments = segments(&route.address, route.method.as_str());
        if self.trie.insert(&segments, route.clone()).is_some() {
            tracing::warn!(
                method = %route.method,
                address = %route.address,
                "route replaced by a later registration"
            );
        }

        if let Some(name) = &route.name {
            if let Some(prev) = self.names.add(name.as_str(), route.address.as_str()) {
                if prev != route.address {
                    tracing::warn!(
                        name = %name,
                        previous = %prev,
                        address = %route.address,
                        "route name reassigned"
                    );
                }
            }
        }

        route
    }

    /// Finds the route for `method` and `path`.
    ///
    /// `path` is the URI path as sent, still percent-encoded. Captured
    /// parameter values are decoded, literal segments are compared as is.
    ///
    /// Returns `None` if nothing matches; the caller is expected to answer
    /// with `404 Not Found`.
    pub fn matches(&self, method: &str, path: &str) -> Option<Match<H>> {
        let segments = segments(normalize(path), method);

        match self.trie.lookup(&segments) {
            Some(Lookup { route, params }) => {
                tracing::trace!(method, path, address = %route.address, "route matched");
                Some(Match {
                    route: route.clone(),
                    params,
                })
            }
            None => {
                tracing::trace!(method, path, "no route matched");
                None
            }
        }
    }

    /// Finds the route for a request, using its method and URI path.
    pub fn recognize<B>(&self, req: &http::Request<B>) -> Option<Match<H>> {
        self.matches(req.method().as_str(), req.uri().path())
    }

    /// Builds the URL of the route registered under `name`.
    ///
    /// Every parameter segment of the address is replaced by the
    /// percent-encoded value from `params`.
    pub fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, UrlForError> {
        let address = self
            .names
            .resolve(name)
            .ok_or_else(|| UrlForError::UnknownName(name.to_string()))?;

        if address.is_empty() {
            return Ok(SEPARATOR.to_string());
        }

        let mut url = String::with_capacity(address.len() + 1);
        for segment in address.split(SEPARATOR) {
            url.push(SEPARATOR);
            match param_name(segment) {
                Some(param) => {
                    let value = params
                        .iter()
                        .find(|(n, _)| *n == param)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| UrlForError::MissingParam {
                            route: name.to_string(),
                            param: param.to_string(),
                        })?;
                    url.extend(utf8_percent_encode(value, SEGMENT_ENCODE_SET));
                }
                None => url.push_str(segment),
            }
        }

        Ok(url)
    }

    /// Returns the name registry.
    pub fn names(&self) -> &NameRegistry {
        &self.names
    }

    /// Returns the number of registered method + address pairs.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Returns `true` if no route has been registered.
    pub fn is_empty(&self) -> bool {
        self.trie.len() == 0
    }
}
