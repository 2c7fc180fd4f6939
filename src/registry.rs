use fnv::FnvHashMap;

/// Maps fully-qualified route names to addresses.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    names: FnvHashMap<String, String>,
}

impl NameRegistry {
    /// Records `name` for `address`, returning the address it previously
    /// pointed at. The last registration of a name wins.
    pub fn add(&mut self, name: impl Into<String>, address: impl Into<String>) -> Option<String> {
        self.names.insert(name.into(), address.into())
    }

    /// Returns the address registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    /// Returns an iterator over `(name, address)` pairs in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(n, a)| (n.as_str(), a.as_str()))
    }

    /// Returns the number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no route has been named.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
