//! Property-based invariant tests for the built-in type descriptors.
//!
//! 1. The "number" comparator is a total order: antisymmetric and
//!    transitive over arbitrary numeric payloads.
//! 2. The "string" comparator agrees with plain `str` ordering.
//! 3. Thousands grouping only inserts separators; stripping them
//!    restores the plain rendering.
//! 4. Search text for numbers carries no separators.

use std::cmp::Ordering;

use proptest::prelude::*;
use tabula_core::{TypeRegistry, Value};

fn numeric_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        (-1.0e12f64..1.0e12).prop_map(Value::Float),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Number comparator totality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn number_compare_is_antisymmetric(a in numeric_value(), b in numeric_value()) {
        let registry = TypeRegistry::with_builtins();
        let number = registry.resolve("number").unwrap();
        prop_assert_eq!(number.compare(&a, &b), number.compare(&b, &a).reverse());
    }
}

proptest! {
    #[test]
    fn number_compare_is_transitive(
        a in numeric_value(),
        b in numeric_value(),
        c in numeric_value(),
    ) {
        let registry = TypeRegistry::with_builtins();
        let number = registry.resolve("number").unwrap();
        if number.compare(&a, &b) != Ordering::Greater
            && number.compare(&b, &c) != Ordering::Greater
        {
            prop_assert_ne!(number.compare(&a, &c), Ordering::Greater);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. String comparator agreement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn string_compare_agrees_with_str_ordering(a in ".{0,12}", b in ".{0,12}") {
        let registry = TypeRegistry::with_builtins();
        let string = registry.resolve("string").unwrap();
        prop_assert_eq!(
            string.compare(&Value::from(a.clone()), &Value::from(b.clone())),
            a.as_str().cmp(b.as_str())
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Grouping round-trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn grouping_strips_back_to_plain_rendering(n in any::<i64>()) {
        let registry = TypeRegistry::with_builtins();
        let number = registry.resolve("number").unwrap();
        let grouped = number.format(&Value::Int(n));
        prop_assert_eq!(grouped.replace(',', ""), n.to_string());
    }
}

proptest! {
    #[test]
    fn grouping_separates_every_three_digits(n in 0i64..i64::MAX) {
        let registry = TypeRegistry::with_builtins();
        let number = registry.resolve("number").unwrap();
        let grouped = number.format(&Value::Int(n));
        for chunk in grouped.split(',').skip(1) {
            prop_assert_eq!(chunk.len(), 3);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Number search text is separator-free
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn number_text_is_plain_decimal(n in any::<i64>()) {
        let registry = TypeRegistry::with_builtins();
        let number = registry.resolve("number").unwrap();
        prop_assert_eq!(number.text(&Value::Int(n)), n.to_string());
    }
}
