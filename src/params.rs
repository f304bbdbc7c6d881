//! Query-string parameters.
//!
//! A [`Params`] value is an ordered map, so encoding always lists keys in
//! ascending order regardless of the order they were set in. Multi-valued
//! parameters are sent as a single `|`-joined value rather than repeated keys.

use std::collections::btree_map;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use url::form_urlencoded;

/// Layout used by the API for date filters: UTC, seconds precision, no offset.
pub const DATE_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S";

const LIST_SEPARATOR: &str = "|";

/// The value of a single query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    /// Serialized as one value joined by `|`, preserving order.
    List(Vec<String>),
}

impl ParamValue {
    /// The value as it appears (before percent-encoding) in the query string.
    pub fn joined(&self) -> String {
        match self {
            ParamValue::Single(value) => value.clone(),
            ParamValue::List(values) => values.join(LIST_SEPARATOR),
        }
    }
}

/// An ordered set of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: BTreeMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to a single value, replacing anything already stored under it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(key.into(), ParamValue::Single(value.into()));
    }

    /// Set `key` to a list of values. Empty lists are not stored.
    pub fn set_list<I, S>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, ParamValue::List(values));
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.values.iter()
    }

    /// Encode as `application/x-www-form-urlencoded`: keys ascending, spaces as
    /// `+`, reserved and non-ASCII bytes percent-encoded.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.values {
            serializer.append_pair(key, &value.joined());
        }
        serializer.finish()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Render a point in time the way the date filters expect it.
pub fn format_timestamp(t: &DateTime<Utc>) -> String {
    t.format(DATE_LAYOUT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn keys_are_encoded_in_ascending_order() {
        let mut params = Params::new();
        params.set("per_page", "15");
        params.set("access_token", "t");
        params.set("page", "3");

        assert_eq!(params.encode(), "access_token=t&page=3&per_page=15");
        assert_eq!(params.encode(), params.encode());
    }

    #[test]
    fn lists_join_with_encoded_pipe() {
        let mut params = Params::new();
        params.set_list("tags.all", ["futebol", "Tempo Real", "Flamengo", "Vasco"]);

        assert_eq!(
            params.encode(),
            "tags.all=futebol%7CTempo+Real%7CFlamengo%7CVasco"
        );
    }

    #[test]
    fn multibyte_values_are_percent_encoded_bytewise() {
        let mut params = Params::new();
        params.set_list("tags.all", ["Fluminense", "Vitória"]);

        assert_eq!(params.encode(), "tags.all=Fluminense%7CVit%C3%B3ria");
    }

    #[test]
    fn empty_list_is_not_stored() {
        let mut params = Params::new();
        params.set_list("only", Vec::<String>::new());
        assert!(params.is_empty());

        params.set_list("only", ["title"]);
        params.set_list("only", Vec::<String>::new());
        assert!(params.get("only").is_none());
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut params = Params::new();
        params.set("name", "Futebol");
        params.set("name", "Basquete");

        assert_eq!(params.len(), 1);
        assert_eq!(
            params.get("name"),
            Some(&ParamValue::Single("Basquete".to_string()))
        );
    }

    #[test]
    fn timestamps_drop_fractional_seconds_and_offset() {
        let t = Utc.with_ymd_and_hms(2017, 3, 30, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(750);
        assert_eq!(format_timestamp(&t), "2017-03-30T00:00:00");
    }
}
