//! Generic named registry
//!
//! Stores items by unique name. Used for the dimensionality table, tub presets
//! and chemistry targets.

use std::collections::btree_map::{self, BTreeMap};

use crate::error::RegistryError;

/// A registry that stores and retrieves items by name
///
/// ```
/// use woostercalc_common::Registry;
///
/// let mut answers = Registry::<i32>::new();
/// answers.register("answer", 42).unwrap();
/// assert_eq!(*answers.get("answer").unwrap(), 42);
/// ```
#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: BTreeMap<String, T>,
}

impl<T> Registry<T> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Register an item under a unique name
    ///
    /// # Errors
    /// Returns [`RegistryError::Duplicate`] if the name is taken
    pub fn register(&mut self, name: impl Into<String>, item: T) -> Result<(), RegistryError> {
        let name = name.into();
        if self.items.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }

        tracing::debug!(name = %name, "registering item");
        self.items.insert(name, item);
        Ok(())
    }

    /// Get an item by name
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] if no item has this name
    pub fn get(&self, name: &str) -> Result<&T, RegistryError> {
        self.items
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Remove and return an item
    pub fn pop(&mut self, name: &str) -> Result<T, RegistryError> {
        self.items
            .remove(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Remove and return an item (alias of [`Registry::pop`])
    pub fn unregister(&mut self, name: &str) -> Result<T, RegistryError> {
        tracing::debug!(name = %name, "unregistering item");
        self.pop(name)
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Number of registered items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Iterate `(name, item)` pairs in name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, T> {
        self.items.iter()
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = (&'a String, &'a T);
    type IntoIter = btree_map::Iter<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = Registry::new();
        registry.register("greeting", "Hello, World!").unwrap();

        assert_eq!(*registry.get("greeting").unwrap(), "Hello, World!");
        assert!(registry.contains("greeting"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = Registry::new();
        registry.register("answer", 42).unwrap();

        let result = registry.register("answer", 43);
        assert_eq!(result, Err(RegistryError::Duplicate("answer".to_string())));
        // Original value is untouched
        assert_eq!(*registry.get("answer").unwrap(), 42);
    }

    #[test]
    fn test_missing_item() {
        let registry = Registry::<i32>::new();
        assert!(matches!(registry.get("nope"), Err(RegistryError::NotFound(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_pop_and_unregister() {
        let mut registry = Registry::new();
        registry.register("a", 1).unwrap();
        registry.register("b", 2).unwrap();

        assert_eq!(registry.pop("a").unwrap(), 1);
        assert_eq!(registry.unregister("b").unwrap(), 2);
        assert!(registry.pop("a").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_names_are_sorted() {
        let mut registry = Registry::new();
        registry.register("volume", ()).unwrap();
        registry.register("area", ()).unwrap();
        registry.register("length", ()).unwrap();

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["area", "length", "volume"]);
    }
}
