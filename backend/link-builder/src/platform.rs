//! Heuristic platform and capability classification.
//!
//! String sniffing against a free-form user agent, isolated here so the
//! heuristics never leak into the parameter engine or the link builder.

use common_enums::{LinkStrategy, Platform};

use crate::consts;

/// Classify the calling environment from its user-agent string.
///
/// Anything that is not an identifiable Apple handheld maps to
/// [`Platform::Android`], including a missing user agent (server side).
/// This is a default-to-Android policy, not a statement about hardware.
pub fn detect_platform(user_agent: Option<&str>) -> Platform {
    let Some(ua) = user_agent else {
        return Platform::Android;
    };
    let ua = ua.to_lowercase();
    if consts::IOS_DEVICE_TOKENS
        .iter()
        .any(|token| ua.contains(token))
    {
        Platform::Ios
    } else {
        Platform::Android
    }
}

/// Whether the environment resolves `intent://` URLs: an Android user agent
/// carrying a Chrome-family token. No user agent means no.
pub fn supports_intent_urls(user_agent: Option<&str>) -> bool {
    let Some(ua) = user_agent else {
        return false;
    };
    let ua = ua.to_lowercase();
    ua.contains(consts::ANDROID_TOKEN)
        && consts::INTENT_BROWSER_TOKENS
            .iter()
            .any(|token| ua.contains(token))
}

/// Recommend how a client should open a UPI link. Derived purely from
/// [`detect_platform`] and [`supports_intent_urls`]; carries no logic of
/// its own.
pub fn best_link_strategy(user_agent: Option<&str>) -> LinkStrategy {
    if detect_platform(user_agent) == Platform::Ios {
        LinkStrategy::Scheme
    } else if supports_intent_urls(user_agent) {
        LinkStrategy::Intent
    } else {
        LinkStrategy::Generic
    }
}
