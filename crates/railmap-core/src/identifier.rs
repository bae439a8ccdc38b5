//! Identifier management using string interning for efficient storage and comparison.
//!
//! This module provides the [`Id`] type with an efficient string-interner based approach.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning.
///
/// Every node and cluster in a diagram is addressed by an `Id`. Two `Id`s
/// created from the same string compare equal, and comparison is a symbol
/// comparison rather than a string comparison.
///
/// # Examples
///
/// ```
/// use railmap_core::identifier::Id;
///
/// // Create identifiers from names
/// let cdn_id = Id::new("cdn");
/// let queue_id = Id::new("queue");
///
/// // Create nested identifiers
/// let nested_id = Id::new("vpc").nested(Id::new("public_zone"));
/// assert_eq!(nested_id, "vpc::public_zone");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a `&str`.
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Creates a nested id by joining this id and a child id with `::`.
    ///
    /// Nested ids give clusters globally unique names even when the same
    /// short name appears at several levels of the cluster tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use railmap_core::identifier::Id;
    ///
    /// let parent = Id::new("vpc");
    /// let child = Id::new("data_tier");
    /// assert_eq!(parent.nested(child), "vpc::data_tier");
    /// ```
    pub fn nested(&self, child_id: Id) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let parent_str = interner
            .resolve(self.0)
            .expect("Parent ID should exist in interner");
        let child_str = interner
            .resolve(child_id.0)
            .expect("Child ID should exist in interner");
        let nested_name = format!("{parent_str}::{child_str}");
        let symbol = interner.get_or_intern(&nested_name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{str_value}")
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice, equivalent to [`Id::new`].
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`.
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("cdn");
        let id2 = Id::new("cdn");
        let id3 = Id::new("waf");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "cdn");
    }

    #[test]
    fn test_nested() {
        let parent = Id::new("vpc");
        let child1 = Id::new("public_zone");
        let child2 = Id::new("app_tier");

        let nested1 = parent.nested(child1);
        let nested2 = parent.nested(child2);

        assert_ne!(nested1, nested2);
        assert_eq!(nested1, "vpc::public_zone");
        assert_eq!(nested2, "vpc::app_tier");
    }

    #[test]
    fn test_deep_nesting() {
        let root = Id::new("vpc");
        let tier = Id::new("data_tier");
        let layer = Id::new("database_layer");

        let level1 = root.nested(tier);
        let level2 = level1.nested(layer);

        assert_eq!(level2, "vpc::data_tier::database_layer");
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("display_test");
        assert_eq!(format!("{id}"), "display_test");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_copy_trait() {
        let id1 = Id::new("copy_test");
        let id2 = id1;
        let id3 = id1;

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1, "copy_test");
    }
}
