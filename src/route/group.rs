use std::sync::Arc;

use crate::{
    endpoint::BoxEndpoint,
    path::{normalize, SEPARATOR},
    Method, Route, Router,
};

/// A scope that stamps a shared prefix, middleware chain and name namespace
/// onto the routes registered through it.
///
/// # Example
///
/// ```
/// use stanza::Router;
///
/// let mut router = Router::<&str>::new();
/// let mut admin = router.group("admin").name("admin").middleware("auth");
/// admin.route().name("users.list").get("users", "list users");
///
/// let mut v1 = admin.group("v1");
/// v1.get("ping", "pong");
///
/// let m = router.matches("GET", "/admin/users").unwrap();
/// assert_eq!(m.route.name(), Some("admin.users.list"));
/// assert_eq!(m.route.middleware(), ["auth"]);
/// assert!(router.matches("GET", "/admin/v1/ping").is_some());
/// ```
pub struct RouteGroup<'a, H = BoxEndpoint> {
    router: &'a mut Router<H>,
    prefix: String,
    namespace: String,
    middleware: Vec<String>,
}

impl<'a, H> RouteGroup<'a, H> {
    pub(crate) fn new(router: &'a mut Router<H>, prefix: &str) -> Self {
        Self {
            router,
            prefix: prefix.to_string(),
            namespace: String::new(),
            middleware: Vec::new(),
        }
    }

    /// The prefix prepended to every address registered in this group.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The dotted namespace prepended to every route name, if any.
    pub fn namespace(&self) -> Option<&str> {
        Some(self.namespace.as_str()).filter(|ns| !ns.is_empty())
    }

    /// Appends a middleware identifier.
    #[must_use]
    pub fn middleware(mut self, id: impl Into<String>) -> Self {
        self.middleware.push(id.into());
        self
    }

    /// Extends the name namespace with `name`.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.namespace = join_name(&self.namespace, name);
        self
    }

    /// Derives a child group whose prefix is this group's prefix followed by
    /// `prefix`.
    ///
    /// The child starts with a copy of this group's middleware and namespace.
    pub fn group(&mut self, prefix: &str) -> RouteGroup<'_, H> {
        let prefix = if self.prefix.is_empty() {
            prefix.to_string()
        } else {
            format!("{}{}{}", normalize(&self.prefix), SEPARATOR, prefix)
        };

        RouteGroup {
            router: &mut *self.router,
            prefix,
            namespace: self.namespace.clone(),
            middleware: self.middleware.clone(),
        }
    }

    /// Starts a route in this group.
    pub fn route(&mut self) -> RouteBuilder<'_, H> {
        RouteBuilder {
            router: &mut *self.router,
            prefix: &self.prefix,
            namespace: &self.namespace,
            group_middleware: &self.middleware,
            name: None,
            middleware: self.middleware.clone(),
        }
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
}

/// Builds one route. The method call at the end registers it.
///
/// Name and middleware must be set before that call; a registered [`Route`]
/// cannot be changed.
pub struct RouteBuilder<'a, H = BoxEndpoint> {
    router: &'a mut Router<H>,
    prefix: &'a str,
    namespace: &'a str,
    group_middleware: &'a [String],
    name: Option<String>,
    middleware: Vec<String>,
}

impl<'a, H> RouteBuilder<'a, H> {
    pub(crate) fn root(router: &'a mut Router<H>) -> Self {
        Self {
            router,
            prefix: "",
            namespace: "",
            group_middleware: &[],
            name: None,
            middleware: Vec::new(),
        }
    }

    /// Sets the route name. The group namespace, if any, is prepended with a
    /// `.` when the route is registered.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a middleware identifier.
    ///
    /// Note that a group with middleware of its own replaces this list when
    /// the route is registered.
    #[must_use]
    pub fn middleware(mut self, id: impl Into<String>) -> Self {
        self.middleware.push(id.into());
        self
    }

    /// Registers the route for `method` at `address`.
    pub fn method(self, method: Method, address: &str, handler: H) -> Arc<Route<H>> {
        let address = if self.prefix.is_empty() {
            normalize(address).to_string()
        } else {
            let joined = format!(
                "{}{}{}",
                normalize(self.prefix),
                SEPARATOR,
                normalize(address)
            );
            normalize(&joined).to_string()
        };

        let middleware = if self.group_middleware.is_empty() {
            self.middleware
        } else {
            self.group_middleware.to_vec()
        };

        let name = self.name.map(|name| join_name(self.namespace, &name));

        self.router.insert(Route {
            address,
            method,
            handler,
            name,
            middleware,
        })
    }

    /// Registers a `GET` route.
    pub fn get(self, address: &str, handler: H) -> Arc<Route<H>> {
        self.method(Method::Get, address, handler)
    }

    /// Registers a `POST` route.
    pub fn post(self, address: &str, handler: H) -> Arc<Route<H>> {
        self.method(Method::Post, address, handler)
    }

    /// Registers a `PUT` route.
    pub fn put(self, address: &str, handler: H) -> Arc<Route<H>> {
        self.method(Method::Put, address, handler)
    }

    /// Registers a `PATCH` route.
    pub fn patch(self, address: &str, handler: H) -> Arc<Route<H>> {
        self.method(Method::Patch, address, handler)
    }

    /// Registers a `DELETE` route.
    pub fn delete(self, address: &str, handler: H) -> Arc<Route<H>> {
        self.method(Method::Delete, address, handler)
    }
}

fn join_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", namespace, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_name() {
        assert_eq!(join_name("", "users"), "users");
        assert_eq!(join_name("admin", "users.list"), "admin.users.list");
    }

    #[test]
    fn group_prefix() {
        let mut router = Router::<()>::new();
        let mut api = router.group("api");
        assert_eq!(api.prefix(), "api");
        assert_eq!(api.group("v1").prefix(), "api/v1");
        assert_eq!(api.group("v1").group("users").prefix(), "api/v1/users");

        let mut slashed = router.group("/api/");
        assert_eq!(slashed.group("v1").prefix(), "api/v1");
    }

    #[test]
    fn group_namespace() {
        let mut router = Router::<()>::new();
        let admin = router.group("admin");
        assert_eq!(admin.namespace(), None);

        let mut admin = admin.name("admin");
        assert_eq!(admin.namespace(), Some("admin"));

        let child = admin.group("users").name("users");
        assert_eq!(child.namespace(), Some("admin.users"));
    }

    #[test]
    fn child_copies_middleware() {
        let mut router = Router::<()>::new();
        let mut parent = router.group("p").middleware("a");
        parent.group("c").middleware("b").get("x", ());
        parent.get("y", ());

        let m = router.matches("GET", "p/c/x").unwrap();
        assert_eq!(m.route.middleware(), ["a", "b"]);
        let m = router.matches("GET", "p/y").unwrap();
        assert_eq!(m.route.middleware(), ["a"]);
    }

    #[test]
    fn address_composition() {
        let mut router = Router::<()>::new();
        let mut api = router.group("/api/");
        assert_eq!(api.get("/users/", ()).address(), "api/users");
        assert_eq!(api.get("/", ()).address(), "api");
        assert_eq!(router.get("/", ()).address(), "");
        assert_eq!(router.route().get("users/$id/", ()).address(), "users/$id");
    }

    #[test]
    fn route_middleware_without_group_middleware() {
        let mut router = Router::<()>::new();
        let route = router
            .route()
            .middleware("a")
            .middleware("b")
            .post("users", ());
        assert_eq!(route.middleware(), ["a", "b"]);
        assert_eq!(route.method(), Method::Post);
    }

    #[test]
    fn group_middleware_replaces_route_middleware() {
        let mut router = Router::<()>::new();
        let mut group = router.group("g").middleware("b").middleware("c");
        let route = group.route().middleware("a").get("x", ());
        assert_eq!(route.middleware(), ["b", "c"]);
    }

    #[test]
    fn unnamed_route_is_not_registered() {
        let mut router = Router::<()>::new();
        let mut admin = router.group("admin").name("admin");
        assert_eq!(admin.get("users", ()).name(), None);
        assert!(router.names().is_empty());
    }
}
