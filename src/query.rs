use std::collections::BTreeMap;

/// Query-string parameters sent with a request.
///
/// Each key maps to one or more values. Keys are encoded in sorted order so the
/// resulting URL is deterministic; values keep their insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: BTreeMap<String, Vec<String>>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every value of `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs.insert(key.into(), vec![value.to_string()]);
        self
    }

    /// Appends `value` to the values of `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl ToString) -> &mut Self {
        self.pairs
            .entry(key.into())
            .or_default()
            .push(value.to_string());
        self
    }

    /// Sets `key` only when `value` is present.
    pub fn set_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Appends every value of `values` under `key`.
    pub fn extend<I, V>(&mut self, key: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        for value in values {
            self.add(key, value);
        }
        self
    }

    /// First value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encodes as `application/x-www-form-urlencoded`, keys sorted.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.pairs {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.add(key, value);
        }
        query
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Query
where
    K: Into<String>,
    V: ToString,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Query;

    #[test]
    fn empty_query_encodes_to_empty_string() {
        let query = Query::new();
        assert!(query.is_empty());
        assert_eq!(query.encode(), "");
    }

    #[test]
    fn keys_are_sorted() {
        let query = Query::from([("page", "1"), ("limit", "10"), ("b", "2"), ("a", "1")]);
        assert_eq!(query.encode(), "a=1&b=2&limit=10&page=1");
    }

    #[test]
    fn repeated_keys_keep_insertion_order() {
        let mut query = Query::new();
        query.add("vault_address", "v2").add("vault_address", "v1");
        query.add("base_mint", "m1");
        assert_eq!(query.encode(), "base_mint=m1&vault_address=v2&vault_address=v1");
    }

    #[test]
    fn set_replaces_previous_values() {
        let mut query = Query::new();
        query.add("page", 1).add("page", 2).set("page", 3);
        assert_eq!(query.encode(), "page=3");
        assert_eq!(query.get("page"), Some("3"));
    }

    #[test]
    fn absent_optional_values_are_omitted() {
        let mut query = Query::new();
        query
            .set_opt("page", Some(2))
            .set_opt::<&str>("query", None)
            .set_opt("hide_blacklist", Some(true));
        assert_eq!(query.encode(), "hide_blacklist=true&page=2");
    }

    #[test]
    fn values_are_escaped() {
        let mut query = Query::new();
        query
            .set("filter_by", "tvl>1000 && is_blacklisted=false")
            .set("sort_by", "volume_24h:desc");
        assert_eq!(
            query.encode(),
            "filter_by=tvl%3E1000+%26%26+is_blacklisted%3Dfalse&sort_by=volume_24h%3Adesc"
        );
    }
}
