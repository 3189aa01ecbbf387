//! Bound path parameters.

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::error::RouteError;

/// Parameters bound by a match, in the order their placeholders appear in
/// the template.
///
/// Values are the raw request segments; no decoding or coercion happens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    entries: Vec<(String, String)>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`.
    ///
    /// A name that is already bound keeps its position and takes the new value.
    pub fn bind(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Positional access, 0 being the leftmost placeholder.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(_, v)| v.as_str())
    }

    /// Values in template order, the handler's positional arguments.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Strict positional destructuring for handlers that want a fixed arity.
    ///
    /// ```
    /// # use path_router::routing::RouteParams;
    /// let mut params = RouteParams::new();
    /// params.bind("id", "42");
    /// let [id] = params.exactly::<1>().unwrap();
    /// assert_eq!(id, "42");
    /// assert!(params.exactly::<2>().is_err());
    /// ```
    pub fn exactly<const N: usize>(&self) -> Result<[&str; N], RouteError> {
        if self.entries.len() != N {
            return Err(RouteError::Arity {
                expected: N,
                actual: self.entries.len(),
            });
        }
        let mut out = [""; N];
        for (slot, (_, value)) in out.iter_mut().zip(&self.entries) {
            *slot = value.as_str();
        }
        Ok(out)
    }
}

impl Serialize for RouteParams {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
