use std::ops::Index;

use smallvec::SmallVec;

/// Path parameters captured while matching a request.
///
/// Values are the raw segments from the request path, in the order their
/// markers appear in the route.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Params(SmallVec<[(String, String); 4]>);

impl Params {
    /// Returns the value captured under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns an iterator over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Returns the number of captured parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn insert(&mut self, name: &str, value: &str) {
        match self.0.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.0.push((name.to_string(), value.to_string())),
        }
    }
}

impl Index<&str> for Params {
    type Output = str;

    fn index(&self, name: &str) -> &Self::Output {
        match self.get(name) {
            Some(value) => value,
            None => panic!("no path parameter named `{}`", name),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Params {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut params = Params::default();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}
