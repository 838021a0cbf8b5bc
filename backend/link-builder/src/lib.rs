//! Platform-specific UPI deep-link generation.
//!
//! Consumes the parameter engine and the immutable app registry to produce
//! Android intent URLs, iOS scheme links or generic `upi://` URIs, with a
//! store fallback where one resolves.

pub(crate) mod consts;
pub mod errors;
pub mod link;
pub mod platform;
pub mod qr;
pub mod registry;

pub use errors::LinkError;
pub use link::{build_app_link, build_app_link_with, AppMetadata, GeneratedLink, LinkRequest};
pub use platform::{best_link_strategy, detect_platform, supports_intent_urls};
pub use qr::{qr_payload, QrRenderer, QrStyle};
pub use registry::{AppRegistry, AppRegistryEntry};
