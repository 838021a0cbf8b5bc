//! The seam towards the external QR renderer.
//!
//! The core supplies text and styling only; every pixel and vector concern
//! belongs to the renderer implementation behind [`QrRenderer`].

use common_enums::QrErrorCorrection;
use common_utils::CustomResult;
use upi_params::{assemble_uri, encode_query, parse_uri, UriParseError};

/// Styling forwarded verbatim to the renderer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QrStyle {
    /// Edge length in pixels
    pub size: u32,
    pub error_correction: QrErrorCorrection,
    pub background_color: String,
    pub foreground_color: String,
    pub corner_radius: u32,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            size: 256,
            error_correction: QrErrorCorrection::default(),
            background_color: "#ffffff".to_string(),
            foreground_color: "#000000".to_string(),
            corner_radius: 0,
        }
    }
}

/// An external renderer consuming core output.
pub trait QrRenderer {
    type Output;
    type Error;

    fn render(&self, text: &str, style: &QrStyle) -> Result<Self::Output, Self::Error>;
}

/// The text a desktop QR code should carry for a UPI link: the generic
/// `upi://` form, re-canonicalized, so a scan resolves in whichever app the
/// device has installed.
pub fn qr_payload(upi_uri: &str) -> CustomResult<String, UriParseError> {
    let parsed = parse_uri(upi_uri)?;
    Ok(assemble_uri(parsed.action, &encode_query(&parsed.params)))
}
