//! Table alias assignment.

use std::collections::HashMap;

/// Prefix shared by every generated alias.
pub const ALIAS_PREFIX: &str = "t";

/// Maps table names to their `t1`, `t2`, ... aliases.
///
/// Aliases are handed out from a single counter the first time a table is
/// registered and never change afterwards, so numbering depends only on the
/// order in which tables were first seen.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    order: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl AliasTable {
    /// Creates an empty alias table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the alias of `table`, assigning the next one if it is new.
    pub fn register(&mut self, table: &str) -> &str {
        let slot = match self.index.get(table) {
            Some(&slot) => slot,
            None => {
                let slot = self.order.len();
                let alias = format!("{ALIAS_PREFIX}{}", slot + 1);
                tracing::debug!(table = %table, alias = %alias, "Registered table alias");
                self.order.push((table.to_string(), alias));
                self.index.insert(table.to_string(), slot);
                slot
            }
        };
        &self.order[slot].1
    }

    /// Returns the alias of `table` if it has been registered.
    #[must_use]
    pub fn get(&self, table: &str) -> Option<&str> {
        self.index
            .get(table)
            .map(|&slot| self.order[slot].1.as_str())
    }

    /// Returns whether `table` has an alias.
    #[must_use]
    pub fn contains(&self, table: &str) -> bool {
        self.index.contains_key(table)
    }

    /// Number of registered tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether no table has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates `(table, alias)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().map(|(t, a)| (t.as_str(), a.as_str()))
    }

    /// Forgets every table and restarts numbering at `t1`.
    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_aliases() {
        let mut aliases = AliasTable::new();
        assert_eq!(aliases.register("users"), "t1");
        assert_eq!(aliases.register("orders"), "t2");
        assert_eq!(aliases.register("items"), "t3");
        assert_eq!(aliases.len(), 3);
    }

    #[test]
    fn test_register_is_stable() {
        let mut aliases = AliasTable::new();
        aliases.register("users");
        aliases.register("orders");
        assert_eq!(aliases.register("users"), "t1");
        assert_eq!(aliases.len(), 2);
    }

    #[test]
    fn test_get_unregistered() {
        let aliases = AliasTable::new();
        assert!(aliases.is_empty());
        assert_eq!(aliases.get("users"), None);
        assert!(!aliases.contains("users"));
    }

    #[test]
    fn test_iter_in_registration_order() {
        let mut aliases = AliasTable::new();
        aliases.register("b");
        aliases.register("a");
        let pairs: Vec<_> = aliases.iter().collect();
        assert_eq!(pairs, vec![("b", "t1"), ("a", "t2")]);
    }

    #[test]
    fn test_clear_restarts_numbering() {
        let mut aliases = AliasTable::new();
        aliases.register("users");
        aliases.register("orders");
        aliases.clear();
        assert!(aliases.is_empty());
        assert_eq!(aliases.register("orders"), "t1");
    }
}
