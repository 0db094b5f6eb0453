//! Query parameter builder.
//!
//! Collects key/value pairs in insertion order so the generated query
//! string is deterministic.

use std::fmt::Display;

/// Builder for URL query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: Display,
    {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the collected pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::QueryParams;

    #[test]
    fn push_opt_skips_none() {
        let mut params = QueryParams::new();
        params.push_opt("reason", Option::<String>::None);
        assert!(params.is_empty());
    }

    #[test]
    fn preserves_insertion_order() {
        let mut params = QueryParams::new();
        params.push("provider", "github");
        params.push("limit", 5);
        params.push_opt("state", Some("xyz"));

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![("provider", "github"), ("limit", "5"), ("state", "xyz")]
        );
    }
}
