//! Stanza is a URL router built on a segment-keyed trie: give it a method and
//! a path, it gives back the registered route and the path parameters.
//!
//! # Example
//!
//! ```
//! use stanza::{endpoint::RequestContext, Router};
//!
//! let mut router = Router::new();
//! router.get("/hello", stanza::endpoint::boxed(|_: &dyn RequestContext| "hello"));
//!
//! let mut api = router.group("api").name("api").middleware("auth");
//! api.route()
//!     .name("users.show")
//!     .get("users/$id", stanza::endpoint::boxed(|ctx: &dyn RequestContext| {
//!         ctx.request().uri().path().to_string()
//!     }));
//!
//! let m = router.matches("GET", "/api/users/42").unwrap();
//! assert_eq!(&m.params["id"], "42");
//! assert_eq!(m.route.middleware(), ["auth"]);
//! assert_eq!(router.url_for("api.users.show", &[("id", "7")]).unwrap(), "/api/users/7");
//! assert!(router.matches("GET", "/api/users").is_none());
//! ```
//!
//! # Paths
//!
//! Addresses are split on `/`. A segment starting with `$` is a parameter: it
//! matches any single segment and captures it under the name that follows
//! the `$`. At each depth a literal segment is preferred over a parameter,
//! and the choice is final; the router does not backtrack to try another
//! branch when a deeper segment fails to match.
//!
//! One leading and one trailing `/` are stripped from both registered
//! addresses and request paths. Nothing else is normalized, so `a//b` has an
//! empty segment in the middle.
//!
//! # Groups
//!
//! A [`RouteGroup`](route::RouteGroup) carries a prefix, a list of middleware
//! identifiers and a dotted name namespace. Child groups copy all three. When
//! a group has middleware, routes registered in it get exactly the group's
//! list. Route names are prefixed with the group namespace and recorded in
//! the router's [`NameRegistry`] for [`Router::url_for`].
//!
//! Registering the same method and address twice replaces the first route,
//! and reusing a name points it at the newer address. Both are logged with
//! [`tracing`](https://crates.io/crates/tracing) but are not errors.

#![forbid(unsafe_code)]
#![deny(unreachable_pub)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod endpoint;
pub mod error;
pub mod path;
pub mod route;

#[doc(inline)]
pub use http;

mod method;
mod params;
mod registry;
mod route_recognizer;
mod router;
mod shared;

pub use endpoint::{BoxEndpoint, Endpoint};
pub use error::{ParseMethodError, UrlForError};
pub use method::Method;
pub use params::Params;
pub use registry::NameRegistry;
pub use route::Route;
pub use router::{Match, Router};
pub use shared::SharedRouter;
