//! Parameter validation and `upi://` URI construction/parsing.
//!
//! The engine is pure and synchronous: [`validate`] is advisory and always
//! returns an outcome, [`build_uri`] and [`parse_uri`] are the only paths
//! that treat bad input as fatal.

pub mod errors;
pub mod params;
pub(crate) mod rules;
pub mod uri;
pub mod validate;

pub use errors::{FieldViolation, UriParseError, ValidationError};
pub use params::UpiParameterSet;
pub use uri::{assemble_uri, build_uri, encode_query, parse_uri, ParsedUpiUri};
pub use validate::{validate, ValidationOutcome};
