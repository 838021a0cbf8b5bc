//! Shared closed enums for the UPI deep-link service.

use std::fmt;

/// The UPI operation a link requests.
///
/// Appears as the authority component of a `upi://` URI and as the
/// query-building argument; both occurrences must agree.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UpiAction {
    /// One-time payment request.
    #[default]
    Pay,
    /// Recurring payment authorization.
    Mandate,
}

/// Target platform for a generated link.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Ios,
}

/// Identifiers of the UPI apps known to the registry.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UpiApp {
    /// The plain `upi://` scheme, resolved by whatever handler is installed.
    Generic,
    Gpay,
    Phonepe,
    Paytm,
    Bhim,
    Amazonpay,
}

/// How a client should open a UPI link in its environment.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    utoipa::ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LinkStrategy {
    /// Android intent URL naming the target package.
    Intent,
    /// iOS custom URL scheme.
    Scheme,
    /// Plain `upi://` URI.
    Generic,
}

/// Provenance of a registry entry's scheme/package data.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
    strum::EnumString,
    utoipa::ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum VerificationStatus {
    /// Confirmed against the app vendor's published documentation.
    Verified,
    /// Observed in the wild, not vendor-documented.
    CommunityObserved,
}

/// QR error-correction level accepted by the external renderer.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::EnumString,
    utoipa::ToSchema,
)]
pub enum QrErrorCorrection {
    L,
    #[default]
    M,
    Q,
    H,
}

impl fmt::Display for QrErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        write!(f, "{level}")
    }
}
