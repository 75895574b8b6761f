//! Expansion of validated specifiers into concrete value sets.

use std::collections::BTreeSet;

use crate::field::FieldSpec;
use crate::grammar::{Specifier, StepBase};

/// Output-size ceiling for an expanded field.
///
/// Applied uniformly regardless of field width; values beyond the cap are
/// silently dropped, never an error. Part of the observable output contract.
pub const MAX_EXPANDED_VALUES: usize = 14;

/// Expands validated specifiers into the sorted, deduplicated set of matching
/// values, truncated to [`MAX_EXPANDED_VALUES`].
///
/// Must only be called with the specifiers a successful
/// [`validate_field`](crate::validation::validate_field) returned.
pub fn expand_field(specifiers: &[Specifier], field: &FieldSpec) -> Vec<u32> {
    let mut values = BTreeSet::new();

    for specifier in specifiers {
        match *specifier {
            Specifier::Wildcard => {
                values.extend(field.min..=field.max);
            }
            Specifier::Value(value) => {
                if field.contains(value) {
                    values.insert(value);
                }
            }
            Specifier::Range(start, end) => {
                values.extend((start..=end).filter(|v| field.contains(*v)));
            }
            Specifier::Stepped(ref base, step) => {
                debug_assert!(step >= 1, "stepped specifier escaped validation");
                let (start, end) = match *base {
                    StepBase::Every => (field.min, field.max),
                    // A bare base runs to the field max, not to itself.
                    StepBase::From(start) => (start, field.max),
                    StepBase::Between(start, end) => (start, end),
                };
                values.extend(
                    (start..=end)
                        .step_by(step as usize)
                        .filter(|v| field.contains(*v)),
                );
            }
        }
    }

    values.into_iter().take(MAX_EXPANDED_VALUES).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_field;
    use pretty_assertions::assert_eq;

    fn expand(raw: &str, field: &FieldSpec) -> Vec<u32> {
        let specifiers = validate_field(raw, field).expect("field must validate");
        expand_field(&specifiers, field)
    }

    #[test]
    fn test_wildcard_expands_to_domain_capped() {
        assert_eq!(expand("*", &FieldSpec::DAY_OF_WEEK), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(
            expand("*", &FieldSpec::MONTH),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
        );
        // Wide domains stop at the cap.
        assert_eq!(
            expand("*", &FieldSpec::MINUTE),
            (0..MAX_EXPANDED_VALUES as u32).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_stepped_wildcard() {
        assert_eq!(expand("*/15", &FieldSpec::MINUTE), vec![0, 15, 30, 45]);
    }

    #[test]
    fn test_stepped_bare_base_runs_to_max() {
        assert_eq!(expand("30/10", &FieldSpec::MINUTE), vec![30, 40, 50]);
    }

    #[test]
    fn test_stepped_range() {
        assert_eq!(expand("1-30/5", &FieldSpec::MINUTE), vec![1, 6, 11, 16, 21, 26]);
        assert_eq!(
            expand("1-15/2", &FieldSpec::DAY_OF_MONTH),
            vec![1, 3, 5, 7, 9, 11, 13, 15]
        );
    }

    #[test]
    fn test_range_and_equal_range() {
        assert_eq!(expand("1-5", &FieldSpec::DAY_OF_WEEK), vec![1, 2, 3, 4, 5]);
        assert_eq!(expand("5-5", &FieldSpec::MINUTE), vec![5]);
    }

    #[test]
    fn test_list_union_is_sorted_and_deduplicated() {
        assert_eq!(
            expand("1-5,10,20-25", &FieldSpec::MINUTE),
            vec![1, 2, 3, 4, 5, 10, 20, 21, 22, 23, 24, 25]
        );
        assert_eq!(expand("5,1-5,3", &FieldSpec::MINUTE), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_truncation_is_silent() {
        let values = expand("0-59", &FieldSpec::MINUTE);
        assert_eq!(values.len(), MAX_EXPANDED_VALUES);
        assert_eq!(values, (0..14).collect::<Vec<_>>());
    }

    #[test]
    fn test_all_values_within_domain_and_ascending() {
        let cases = [
            ("*", FieldSpec::MINUTE),
            ("*/7", FieldSpec::MINUTE),
            ("1-5,10,20-25", FieldSpec::MINUTE),
            ("50/3", FieldSpec::MINUTE),
            ("0,6", FieldSpec::DAY_OF_WEEK),
            ("1-15/2", FieldSpec::DAY_OF_MONTH),
        ];
        for (raw, field) in cases {
            let values = expand(raw, &field);
            assert!(values.len() <= MAX_EXPANDED_VALUES);
            assert!(values.iter().all(|v| field.contains(*v)), "case {raw}");
            assert!(
                values.windows(2).all(|w| w[0] < w[1]),
                "not strictly ascending for {raw}"
            );
        }
    }
}
