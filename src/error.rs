//! Some common error types.

/// A possible error value when parsing an HTTP method token.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
#[error("unsupported method `{0}`")]
pub struct ParseMethodError(pub String);

/// A possible error value when generating a URL from a route name.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum UrlForError {
    /// No route was registered under this name.
    #[error("no route named `{0}`")]
    UnknownName(String),

    /// The route address has a parameter that was not supplied.
    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam {
        /// Fully-qualified route name.
        route: String,
        /// Name of the missing parameter.
        param: String,
    },
}
