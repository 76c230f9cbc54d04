//! Entity identifiers backed by a global string interner.
//!
//! Record ids are compared and hashed constantly while prerequisites are
//! resolved and lanes are filled, so they are interned once and carried
//! around as a copyable symbol.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Interned identifier of an entity.
///
/// # Examples
///
/// ```
/// use ringtree_core::identifier::Id;
///
/// let a = Id::new("rust-basics");
/// let b: Id = "rust-basics".into();
/// assert_eq!(a, b);
/// assert_eq!(a, "rust-basics");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns the identifier text.
    pub fn as_string(&self) -> String {
        interner()
            .resolve(self.0)
            .map(str::to_owned)
            .unwrap_or_default()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_new_interns_same_text() {
        let id1 = Id::new("skill-a");
        let id2 = Id::new("skill-a");
        let id3 = Id::new("skill-b");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "skill-a");
    }

    #[test]
    fn test_display() {
        let id = Id::new("display_test");
        assert_eq!(format!("{id}"), "display_test");
        assert_eq!(id.as_string(), "display_test");
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("Component");
        let other = String::from("Element");

        assert!(id == "Component");
        assert!(id != other.as_str());

        let empty = Id::new("");
        assert!(empty == "");
    }

    #[test]
    fn test_hash_lookup() {
        let mut map = HashMap::new();
        map.insert(Id::new("key1"), 1);
        map.insert(Id::new("key2"), 2);

        assert_eq!(map.get(&Id::new("key1")), Some(&1));
        assert_eq!(map.len(), 2);
    }
}
