use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::error::ParseMethodError;

/// The HTTP methods a route can be registered under.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl Method {
    /// The upper-case token, which is also the first segment of every stored
    /// path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Converts into the [`http`] crate's method type.
    pub fn into_http_method(self) -> http::Method {
        match self {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Patch => http::Method::PATCH,
            Method::Delete => http::Method::DELETE,
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "PATCH" => Method::Patch,
            "DELETE" => Method::Delete,
            _ => return Err(ParseMethodError(s.to_string())),
        })
    }
}

impl TryFrom<&http::Method> for Method {
    type Error = ParseMethodError;

    fn try_from(method: &http::Method) -> Result<Self, Self::Error> {
        method.as_str().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        for method in [
            Method::Get,
            Method::Post,
            Method::Put,
            Method::Patch,
            Method::Delete,
        ] {
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
            assert_eq!(Method::try_from(&method.into_http_method()), Ok(method));
            assert_eq!(method.to_string(), method.as_str());
        }

        assert_eq!(
            "get".parse::<Method>(),
            Err(ParseMethodError("get".to_string()))
        );
        assert!(Method::try_from(&http::Method::HEAD).is_err());
    }
}
