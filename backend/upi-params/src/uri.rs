//! `upi://<action>?<query>` construction and parsing.

use std::str::FromStr;

use common_enums::UpiAction;
use common_utils::{consts, CustomResult};
use error_stack::{Report, ResultExt};
use url::Url;

use crate::{
    errors::{UriParseError, ValidationError},
    params::UpiParameterSet,
    validate::validate,
};

/// A decoded and validated UPI URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedUpiUri {
    pub action: UpiAction,
    /// The normalized parameter set, not the raw decoded one.
    pub params: UpiParameterSet,
}

/// Serialize a parameter set into its wire query string: form-urlencoded
/// (`+` for spaces), canonical fields first, passthrough keys after.
pub fn encode_query(params: &UpiParameterSet) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.canonical_pairs() {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Assemble the wire form from an action and an already-encoded query.
/// An empty query yields `upi://<action>` with no `?`.
pub fn assemble_uri(action: UpiAction, query: &str) -> String {
    if query.is_empty() {
        format!("{}://{action}", consts::UPI_SCHEME)
    } else {
        format!("{}://{action}?{query}", consts::UPI_SCHEME)
    }
}

/// Build a `upi://` URI from a parameter set.
///
/// This is the only path that treats validation failure as fatal; the
/// returned [`ValidationError`] carries every violation, comma-joined in its
/// message.
pub fn build_uri(
    params: &UpiParameterSet,
    action: UpiAction,
) -> CustomResult<String, ValidationError> {
    let outcome = validate(params);
    if !outcome.is_valid() {
        return Err(Report::new(ValidationError::new(outcome.violations)));
    }
    Ok(assemble_uri(action, &encode_query(&outcome.normalized)))
}

/// Parse and validate a `upi://` URI.
///
/// Stricter than a raw decode: a syntactically well-formed URI whose
/// parameters fail validation is rejected with the validation detail in the
/// report chain.
pub fn parse_uri(uri: &str) -> CustomResult<ParsedUpiUri, UriParseError> {
    let parsed = Url::parse(uri).change_context(UriParseError::Malformed)?;
    if parsed.scheme() != consts::UPI_SCHEME {
        return Err(Report::new(UriParseError::UnsupportedScheme {
            scheme: parsed.scheme().to_string(),
        }));
    }

    let action_token = parsed.host_str().unwrap_or_default();
    let action = UpiAction::from_str(action_token).map_err(|_| {
        Report::new(UriParseError::UnrecognizedAction {
            action: action_token.to_string(),
        })
    })?;

    let raw_pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(parsed.query().unwrap_or_default())
            .change_context(UriParseError::Malformed)?;

    let outcome = validate(&UpiParameterSet::from_pairs(raw_pairs));
    if !outcome.is_valid() {
        let failure = ValidationError::new(outcome.violations);
        let summary = failure.summary();
        tracing::debug!(%uri, %summary, "rejecting UPI URI with invalid parameters");
        return Err(Report::new(failure)
            .change_context(UriParseError::InvalidParameters { summary }));
    }

    Ok(ParsedUpiUri {
        action,
        params: outcome.normalized,
    })
}
