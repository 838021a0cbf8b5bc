//! Advisory validation and normalization of parameter sets.

use common_utils::consts;

use crate::{errors::FieldViolation, params::UpiParameterSet, rules};

/// The result of validating a parameter set.
///
/// The normalized set is populated even when violations were found, so
/// callers can inspect partial results; only the build path treats an
/// invalid outcome as fatal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// One entry per failed required check or per offending key.
    pub violations: Vec<FieldViolation>,
    /// Trimmed, checked values; offending keys are excluded, passthrough
    /// keys are kept verbatim.
    pub normalized: UpiParameterSet,
}

impl ValidationOutcome {
    /// True iff no violation was recorded.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validate and normalize a parameter set.
///
/// Pure function of its input: required `pa`/`pn` are checked first without
/// short-circuiting, every present key is trimmed and checked against the
/// rule table (first failing constraint wins per key), unrecognized keys
/// pass through, and a bare amount gets `cu = INR` injected.
pub fn validate(params: &UpiParameterSet) -> ValidationOutcome {
    let mut violations = Vec::new();
    let mut normalized = UpiParameterSet::default();

    for field in [consts::PAYEE_ADDRESS, consts::PAYEE_NAME] {
        let missing = params
            .known_value(field)
            .is_none_or(|value| value.trim().is_empty());
        if missing {
            violations.push(FieldViolation::MissingRequired { field });
        }
    }

    for (field, value) in params.known_pairs() {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        match rules::check_field(field, trimmed) {
            Ok(()) => normalized.set(field.to_string(), trimmed.to_string()),
            Err(violation) => violations.push(violation),
        }
    }

    for (key, value) in &params.additional {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            normalized
                .additional
                .push((key.clone(), trimmed.to_string()));
        }
    }

    if normalized.am.is_some() && normalized.cu.is_none() {
        normalized.cu = Some(consts::INR.to_string());
    }

    ValidationOutcome {
        violations,
        normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> UpiParameterSet {
        UpiParameterSet::from_pairs([("pa", "merchant@okaxis"), ("pn", "Merchant Store")])
    }

    #[test]
    fn empty_set_reports_both_required_fields() {
        let outcome = validate(&UpiParameterSet::default());
        assert!(!outcome.is_valid());
        assert!(outcome.violations.contains(&FieldViolation::MissingRequired {
            field: consts::PAYEE_ADDRESS
        }));
        assert!(outcome.violations.contains(&FieldViolation::MissingRequired {
            field: consts::PAYEE_NAME
        }));
    }

    #[test]
    fn minimal_set_is_valid_and_untouched() {
        let outcome = validate(&minimal());
        assert!(outcome.is_valid());
        assert_eq!(outcome.normalized.pa.as_deref(), Some("merchant@okaxis"));
        assert_eq!(outcome.normalized.pn.as_deref(), Some("Merchant Store"));
        assert_eq!(outcome.normalized.cu, None);
    }

    #[test]
    fn amount_without_currency_injects_inr() {
        let mut params = minimal();
        params.am = Some("149.00".to_string());
        let outcome = validate(&params);
        assert!(outcome.is_valid());
        assert_eq!(outcome.normalized.cu.as_deref(), Some("INR"));
    }

    #[test]
    fn explicit_currency_is_not_overwritten() {
        let mut params = minimal();
        params.am = Some("149.00".to_string());
        params.cu = Some("INR".to_string());
        let outcome = validate(&params);
        assert_eq!(outcome.normalized.cu.as_deref(), Some("INR"));
        assert!(outcome.is_valid());
    }

    #[test]
    fn invalid_vpa_is_reported_and_excluded_from_normalized() {
        let mut params = minimal();
        params.pa = Some("invalid-vpa".to_string());
        let outcome = validate(&params);
        assert!(!outcome.is_valid());
        assert_eq!(outcome.normalized.pa, None);
        let message = outcome
            .violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        assert!(message.contains("username@bank"));
    }

    #[test]
    fn first_failing_constraint_wins_per_key() {
        // 300 chars fails the length check before the pattern ever runs.
        let mut params = minimal();
        params.pa = Some("a".repeat(300));
        let outcome = validate(&params);
        assert_eq!(
            outcome.violations,
            vec![FieldViolation::TooLong {
                field: consts::PAYEE_ADDRESS,
                max: consts::MAX_PAYEE_ADDRESS_LENGTH,
            }]
        );
    }

    #[test]
    fn values_are_trimmed_before_checks() {
        let params = UpiParameterSet::from_pairs([
            ("pa", "  merchant@okaxis  "),
            ("pn", " Merchant "),
            ("am", " 10.00 "),
        ]);
        let outcome = validate(&params);
        assert!(outcome.is_valid());
        assert_eq!(outcome.normalized.pa.as_deref(), Some("merchant@okaxis"));
        assert_eq!(outcome.normalized.pn.as_deref(), Some("Merchant"));
        assert_eq!(outcome.normalized.am.as_deref(), Some("10.00"));
    }

    #[test]
    fn whitespace_only_values_are_dropped_not_kept_empty() {
        let mut params = minimal();
        params.tn = Some("   ".to_string());
        let outcome = validate(&params);
        assert!(outcome.is_valid());
        assert_eq!(outcome.normalized.tn, None);
    }

    #[test]
    fn whitespace_only_required_field_counts_as_missing() {
        let mut params = minimal();
        params.pn = Some(" \t ".to_string());
        let outcome = validate(&params);
        assert!(outcome.violations.contains(&FieldViolation::MissingRequired {
            field: consts::PAYEE_NAME
        }));
    }

    #[test]
    fn unknown_keys_pass_through_trimmed() {
        let mut params = minimal();
        params
            .additional
            .push(("futureField".to_string(), "  value  ".to_string()));
        params.additional.push(("emptyOne".to_string(), "  ".to_string()));
        let outcome = validate(&params);
        assert!(outcome.is_valid());
        assert_eq!(
            outcome.normalized.additional,
            vec![("futureField".to_string(), "value".to_string())]
        );
    }

    #[test]
    fn one_violation_per_offending_key_and_all_keys_checked() {
        let params = UpiParameterSet::from_pairs([
            ("pa", "bad vpa with spaces"),
            ("pn", "Merchant"),
            ("am", "abc"),
            ("cu", "USD"),
        ]);
        let outcome = validate(&params);
        assert_eq!(outcome.violations.len(), 3);
        assert_eq!(outcome.normalized.am, None);
        assert_eq!(outcome.normalized.cu, None);
        assert_eq!(outcome.normalized.pn.as_deref(), Some("Merchant"));
    }
}
