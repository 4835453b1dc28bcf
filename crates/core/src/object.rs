//! Deep-freeze helper for sharing immutable snapshots.

use std::sync::Arc;

use serde::{Serialize, Serializer};

/// An immutable, cheaply shareable snapshot of a value.
///
/// Only shared references are handed out, so nothing reachable through a
/// `Frozen<T>` (nested structs, collections, timestamps) can be mutated.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Frozen<T>(Arc<T>);

impl<T> Frozen<T> {
    /// Another handle to the same frozen data.
    pub fn freeze(&self) -> Self {
        Self(Arc::clone(&self.0))
    }

    /// Whether both handles point at the same snapshot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Frozen<T> {
    fn clone(&self) -> Self {
        self.freeze()
    }
}

impl<T> core::ops::Deref for Frozen<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> AsRef<T> for Frozen<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: Serialize> Serialize for Frozen<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_ref().serialize(serializer)
    }
}

/// Freeze `value` and everything it owns.
pub fn deep_freeze<T>(value: T) -> Frozen<T> {
    Frozen(Arc::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize)]
    struct Deep {
        prop2: String,
        prop3: DateTime<Utc>,
    }

    #[derive(Debug, PartialEq, Serialize)]
    struct Outer {
        prop1: String,
        deep: Deep,
    }

    #[test]
    fn scalars_stay_scalars() {
        let s = deep_freeze("a");
        assert_eq!(*s, "a");

        assert!(*deep_freeze(true));
        assert!(!*deep_freeze(false));
        assert_eq!(*deep_freeze(5) + 1, 6);
    }

    #[test]
    fn nested_values_are_readable_through_snapshot() {
        let created = Utc::now();
        let obj = deep_freeze(Outer {
            prop1: "value1".to_string(),
            deep: Deep {
                prop2: "value2".to_string(),
                prop3: created,
            },
        });

        assert_eq!(obj.prop1, "value1");
        assert_eq!(obj.deep.prop2, "value2");
        assert_eq!(obj.deep.prop3, created);
    }

    #[test]
    fn freezing_again_shares_the_snapshot() {
        let obj = deep_freeze(vec![1, 2, 3]);
        let again = obj.freeze();
        assert!(obj.ptr_eq(&again));
        assert!(obj.ptr_eq(&obj.clone()));

        let nested = deep_freeze(obj.clone());
        assert_eq!(**nested, vec![1, 2, 3]);
    }

    #[test]
    fn serializes_transparently() {
        let obj = deep_freeze(json!({ "a": 1 }));
        assert_eq!(serde_json::to_value(&obj).unwrap(), json!({ "a": 1 }));
    }
}
