//! Link-builder error types.

use common_enums::UpiAction;

/// Failures raised while generating an app link.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    /// Caller contract violation: no link source at all
    #[error("either `upi_uri` or `upi_params` must be provided")]
    MissingLinkSource,
    /// The supplied app id is not in the registry
    #[error("unknown UPI app `{0}`")]
    AppNotFound(String),
    /// An explicit action contradicts the action inside the supplied URI
    #[error("requested action `{requested}` does not match `{in_uri}` from the supplied URI")]
    ActionMismatch {
        requested: UpiAction,
        in_uri: UpiAction,
    },
    /// The supplied `upi_uri` failed to parse or validate
    #[error("supplied UPI URI is not valid")]
    InvalidUri,
    /// The supplied `upi_params` failed validation
    #[error("supplied UPI parameters are not valid")]
    InvalidParameters,
}
