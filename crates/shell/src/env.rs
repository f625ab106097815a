// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Minish Contributors

//! Environment variable store.
//!
//! A name → value mapping with stable (insertion) iteration order, so the
//! vector handed to child processes is reproducible. Values are optional:
//! an entry seeded from a string without `=` is stored with no value, and
//! flattens to an empty value for children.

use indexmap::IndexMap;

/// The shell's environment variables.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: IndexMap<String, Option<String>>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an environment from the calling process.
    pub fn from_process() -> Self {
        let mut env = Self::new();
        for (key, value) in std::env::vars() {
            env.set(key, value);
        }
        env
    }

    /// Seed an environment from `KEY=VALUE` entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut env = Self::new();
        for entry in entries {
            env.set_entry(entry.as_ref());
        }
        env
    }

    /// Insert an entry in `KEY=VALUE` form, splitting on the first `=`.
    /// An entry without `=` is stored with no value.
    pub fn set_entry(&mut self, entry: &str) {
        match entry.split_once('=') {
            Some((key, value)) => self.set(key, value),
            None => {
                self.vars.insert(entry.to_string(), None);
            }
        }
    }

    /// Set a variable, replacing any prior value. Insertion order is
    /// preserved for existing keys.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), Some(value.into()));
    }

    /// Remove a variable. Remaining entries keep their relative order.
    pub fn unset(&mut self, key: &str) {
        self.vars.shift_remove(key);
    }

    /// Look up a variable's value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).and_then(|value| value.as_deref())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.vars
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Flatten to `(key, value)` pairs for a child process, preserving
    /// mapping order. Entries without a value flatten to an empty string.
    pub fn flatten(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(key, value)| (key.clone(), value.clone().unwrap_or_default()))
            .collect()
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if the environment holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_entry_splits_on_first_equals() {
        let mut env = Environment::new();
        env.set_entry("GREETING=a=b=c");
        assert_eq!(env.get("GREETING"), Some("a=b=c"));
    }

    #[test]
    fn entry_without_equals_has_no_value() {
        let mut env = Environment::new();
        env.set_entry("MARKER");
        assert_eq!(env.get("MARKER"), None);
        assert_eq!(env.len(), 1);
        assert_eq!(env.flatten(), vec![("MARKER".to_string(), String::new())]);
    }

    #[test]
    fn flatten_preserves_insertion_order() {
        let env = Environment::from_entries(["ONE=1", "TWO=2", "THREE=3"]);
        let keys: Vec<_> = env.flatten().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["ONE", "TWO", "THREE"]);
    }

    #[test]
    fn update_keeps_position() {
        let mut env = Environment::from_entries(["ONE=1", "TWO=2"]);
        env.set("ONE", "uno");
        let flat = env.flatten();
        assert_eq!(flat[0], ("ONE".to_string(), "uno".to_string()));
        assert_eq!(flat[1].0, "TWO");
    }

    #[test]
    fn unset_removes_only_the_named_variable() {
        let mut env = Environment::from_entries(["ONE=1", "TWO=2", "THREE=3"]);
        env.unset("TWO");
        assert_eq!(env.get("TWO"), None);
        let keys: Vec<_> = env.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["ONE", "THREE"]);
    }
}
