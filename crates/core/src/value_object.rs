//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// holding the same attributes are interchangeable. To "modify" one, build a
/// new one. [`UniqueEntityId`](crate::UniqueEntityId) is the value object every
/// entity carries.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two value objects with same values are equal)
/// - **Entity**: has identity (two entities with the same id are the same entity,
///   whatever their properties)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Whether `self` and `other` describe the same value.
    fn same_value_as(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Money {
        amount: i64,
        currency: String,
    }

    impl ValueObject for Money {}

    #[test]
    fn equal_attributes_mean_same_value() {
        let m1 = Money { amount: 100, currency: "USD".to_string() };
        let m2 = Money { amount: 100, currency: "USD".to_string() };
        let m3 = Money { amount: 100, currency: "EUR".to_string() };

        assert!(m1.same_value_as(&m2));
        assert!(!m1.same_value_as(&m3));
    }

    #[test]
    fn identifiers_compare_by_value() {
        let raw = "b0da610e-726a-4e1a-aa9a-a1baa8e1d876";
        let a = crate::UniqueEntityId::parse(raw).unwrap();
        let b = crate::UniqueEntityId::parse(raw).unwrap();
        assert!(a.same_value_as(&b));
    }
}
