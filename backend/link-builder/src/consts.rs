//! Link-builder constants

/// Placeholder substituted with the canonical query in iOS templates
pub(crate) const QUERY_PLACEHOLDER: &str = "{query}";

/// User-agent tokens identifying an Apple handheld
pub(crate) const IOS_DEVICE_TOKENS: [&str; 3] = ["iphone", "ipad", "ipod"];
/// User-agent token identifying Android
pub(crate) const ANDROID_TOKEN: &str = "android";
/// Browser tokens that resolve `intent://` URLs
pub(crate) const INTENT_BROWSER_TOKENS: [&str; 3] = ["chrome", "chromium", "crios"];
