//! Ordering by optional numeric hints.

use std::cmp::Ordering;

/// Compare two optional order hints.
///
/// Entries with a hint come before entries without one; two hints compare
/// numerically (so `-0` equals `0`); two missing hints compare equal so a
/// stable sort keeps their input order. Hints are always finite.
pub(crate) fn compare_hints(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable sort of `items` by their order hints.
pub(crate) fn sort_by_hint<T>(items: &mut [T], hint: impl Fn(&T) -> Option<f64>) {
    items.sort_by(|a, b| compare_hints(hint(a), hint(b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(items: &[(char, Option<f64>)]) -> String {
        let mut items = items.to_vec();
        sort_by_hint(&mut items, |(_, hint)| *hint);
        items.iter().map(|(c, _)| *c).collect()
    }

    #[test]
    fn test_hints_sort_ascending() {
        assert_eq!(sorted(&[('a', Some(3.0)), ('b', Some(1.0)), ('c', Some(2.0))]), "bca");
    }

    #[test]
    fn test_hinted_entries_precede_unhinted_regardless_of_position() {
        assert_eq!(sorted(&[('a', None), ('b', None), ('c', Some(99.0))]), "cab");
    }

    #[test]
    fn test_unhinted_entries_keep_input_order() {
        assert_eq!(sorted(&[('x', None), ('a', None), ('m', None)]), "xam");
    }

    #[test]
    fn test_equal_hints_are_stable() {
        assert_eq!(
            sorted(&[('a', Some(1.0)), ('b', None), ('c', Some(1.0)), ('d', Some(0.5))]),
            "dacb"
        );
    }

    #[test]
    fn test_no_constant_default_for_missing_hints() {
        // A large hint must still precede an entry that has none.
        assert_eq!(sorted(&[('a', None), ('b', Some(1000.0))]), "ba");
    }

    #[test]
    fn test_negative_and_fractional_hints() {
        assert_eq!(sorted(&[('a', Some(0.0)), ('b', Some(-1.5)), ('c', Some(0.25))]), "bac");
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        assert_eq!(sorted(&[('a', Some(0.0)), ('b', Some(-0.0))]), "ab");
        assert_eq!(sorted(&[('a', Some(-0.0)), ('b', Some(0.0))]), "ab");
    }

    #[test]
    fn test_negative_zero_literal_keeps_document_order() {
        let text = r#"[{"appName": "A", "groups": [{"groupName": "G", "shortcuts": [
            {"action": "first", "description": "", "keys": ["K"], "order": 0},
            {"action": "second", "description": "", "keys": ["K"], "order": -0}
        ]}]}]"#;
        let catalog = crate::normalize::normalize_str(text).unwrap();
        let actions: Vec<&str> = catalog.shortcuts().map(|(_, _, s)| s.action.as_str()).collect();
        assert_eq!(actions, ["first", "second"]);
    }
}
