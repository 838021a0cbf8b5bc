//! The NPCI-derived constraint table for recognized UPI fields.

use std::{collections::HashMap, sync::LazyLock};

use common_utils::consts;
use regex::Regex;

use crate::errors::FieldViolation;

/// One constraint on a field value.
///
/// Constraints run in declaration order and the first failure wins; no later
/// constraint for that field is evaluated.
pub(crate) enum Constraint {
    MaxLength(usize),
    Pattern {
        regex: Result<Regex, regex::Error>,
        expected: &'static str,
    },
    AllowedValues(&'static [&'static str]),
}

static FIELD_RULES: LazyLock<HashMap<&'static str, Vec<Constraint>>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert(
        consts::PAYEE_ADDRESS,
        vec![
            Constraint::MaxLength(consts::MAX_PAYEE_ADDRESS_LENGTH),
            Constraint::Pattern {
                regex: Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+$"),
                expected: "a VPA of the form username@bank (letters, digits, '.', '_' or '-', then '@' and the PSP handle)",
            },
        ],
    );
    map.insert(
        consts::PAYEE_NAME,
        vec![Constraint::MaxLength(consts::MAX_PAYEE_NAME_LENGTH)],
    );
    map.insert(
        consts::AMOUNT,
        vec![
            Constraint::MaxLength(consts::MAX_AMOUNT_LENGTH),
            Constraint::Pattern {
                regex: Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$"),
                expected: "digits with an optional one or two decimal places",
            },
        ],
    );
    map.insert(
        consts::CURRENCY,
        vec![Constraint::AllowedValues(&[consts::INR])],
    );
    map.insert(
        consts::TXN_REF,
        vec![
            Constraint::MaxLength(consts::MAX_TXN_REF_LENGTH),
            Constraint::Pattern {
                regex: Regex::new(r"^[a-zA-Z0-9-]+$"),
                expected: "letters, digits and hyphens",
            },
        ],
    );
    map.insert(
        consts::TXN_NOTE,
        vec![Constraint::MaxLength(consts::MAX_TXN_NOTE_LENGTH)],
    );
    map.insert(
        consts::REF_URL,
        vec![
            Constraint::MaxLength(consts::MAX_REF_URL_LENGTH),
            Constraint::Pattern {
                regex: Regex::new(r"^https?://"),
                expected: "an http:// or https:// URL",
            },
        ],
    );
    map.insert(
        consts::MODE,
        vec![Constraint::MaxLength(consts::MAX_MODE_LENGTH)],
    );
    map.insert(
        consts::ORG_ID,
        vec![Constraint::MaxLength(consts::MAX_ORG_ID_LENGTH)],
    );
    map.insert(
        consts::SIGNATURE,
        vec![Constraint::MaxLength(consts::MAX_SIGNATURE_LENGTH)],
    );
    map.insert(
        consts::MERCHANT_CODE,
        vec![Constraint::Pattern {
            regex: Regex::new(r"^[0-9]{4}$"),
            expected: "exactly four digits",
        }],
    );
    map.insert(
        consts::TERMINAL_ID,
        vec![Constraint::MaxLength(consts::MAX_TERMINAL_ID_LENGTH)],
    );
    map
});

/// Check a trimmed, non-empty value against its field's constraints.
///
/// Fields with no rule entry always pass; they are the forward-compatibility
/// passthrough, never an error.
pub(crate) fn check_field(field: &'static str, value: &str) -> Result<(), FieldViolation> {
    let Some(constraints) = FIELD_RULES.get(field) else {
        return Ok(());
    };
    for constraint in constraints {
        match constraint {
            Constraint::MaxLength(max) => {
                if value.chars().count() > *max {
                    return Err(FieldViolation::TooLong { field, max: *max });
                }
            }
            Constraint::Pattern { regex, expected } => {
                // A pattern that failed to compile admits nothing.
                match regex {
                    Ok(re) if re.is_match(value) => {}
                    _ => return Err(FieldViolation::BadFormat { field, expected }),
                }
            }
            Constraint::AllowedValues(allowed) => {
                if !allowed.contains(&value) {
                    return Err(FieldViolation::NotAllowed { field, allowed });
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_length_is_checked_before_pattern() {
        let long_vpa = format!("{}@bank", "a".repeat(300));
        assert_eq!(
            check_field(consts::PAYEE_ADDRESS, &long_vpa),
            Err(FieldViolation::TooLong {
                field: consts::PAYEE_ADDRESS,
                max: consts::MAX_PAYEE_ADDRESS_LENGTH,
            })
        );
    }

    #[test]
    fn amount_accepts_up_to_two_decimal_places() {
        assert_eq!(check_field(consts::AMOUNT, "100"), Ok(()));
        assert_eq!(check_field(consts::AMOUNT, "100.5"), Ok(()));
        assert_eq!(check_field(consts::AMOUNT, "100.50"), Ok(()));
        assert!(check_field(consts::AMOUNT, "100.505").is_err());
        assert!(check_field(consts::AMOUNT, ".50").is_err());
        assert!(check_field(consts::AMOUNT, "1,000").is_err());
    }

    #[test]
    fn currency_only_admits_inr() {
        assert_eq!(check_field(consts::CURRENCY, "INR"), Ok(()));
        assert_eq!(
            check_field(consts::CURRENCY, "USD"),
            Err(FieldViolation::NotAllowed {
                field: consts::CURRENCY,
                allowed: &[consts::INR],
            })
        );
    }

    #[test]
    fn merchant_code_must_be_four_digits() {
        assert_eq!(check_field(consts::MERCHANT_CODE, "5411"), Ok(()));
        assert!(check_field(consts::MERCHANT_CODE, "541").is_err());
        assert!(check_field(consts::MERCHANT_CODE, "54111").is_err());
        assert!(check_field(consts::MERCHANT_CODE, "54a1").is_err());
    }

    #[test]
    fn reference_url_requires_http_scheme() {
        assert_eq!(check_field(consts::REF_URL, "https://shop.example/order"), Ok(()));
        assert_eq!(check_field(consts::REF_URL, "http://shop.example"), Ok(()));
        assert!(check_field(consts::REF_URL, "ftp://shop.example").is_err());
    }

    #[test]
    fn unrecognized_fields_always_pass() {
        assert_eq!(check_field("zzfuture", "anything at all"), Ok(()));
    }
}
