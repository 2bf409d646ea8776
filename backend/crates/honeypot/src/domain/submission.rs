//! Submitted Form Fields
//!
//! Read-only view over whatever the form layer parsed a submission into.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Key/value lookup over submitted form data
pub trait SubmittedFields {
    /// Value of the field called `name`, if present
    fn field(&self, name: &str) -> Option<&str>;

    /// First `(name, value)` pair satisfying `predicate`.
    ///
    /// Order follows the underlying collection, which for `HashMap` is
    /// arbitrary; pass ordered pairs when order matters.
    fn find_field(&self, predicate: &dyn Fn(&str, &str) -> bool) -> Option<(&str, &str)>;
}

impl<S: BuildHasher> SubmittedFields for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn find_field(&self, predicate: &dyn Fn(&str, &str) -> bool) -> Option<(&str, &str)> {
        self.iter()
            .find(|(k, v)| predicate(k.as_str(), v.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl SubmittedFields for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }

    fn find_field(&self, predicate: &dyn Fn(&str, &str) -> bool) -> Option<(&str, &str)> {
        self.iter()
            .find(|(k, v)| predicate(k.as_str(), v.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Ordered pairs as produced by urlencoded parsing; the first occurrence of
/// a repeated key wins.
impl SubmittedFields for [(String, String)] {
    fn field(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v.as_str())
    }

    fn find_field(&self, predicate: &dyn Fn(&str, &str) -> bool) -> Option<(&str, &str)> {
        self.iter()
            .find(|(k, v)| predicate(k.as_str(), v.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl SubmittedFields for Vec<(String, String)> {
    fn field(&self, name: &str) -> Option<&str> {
        self.as_slice().field(name)
    }

    fn find_field(&self, predicate: &dyn Fn(&str, &str) -> bool) -> Option<(&str, &str)> {
        self.as_slice().find_field(predicate)
    }
}
