//! Deep-link generation for a target app and platform.


use std::str::FromStr;

use common_enums::{Platform, UpiAction, UpiApp, VerificationStatus};
use common_utils::{pii, CustomResult};
use error_stack::{Report, ResultExt};
use upi_params::{assemble_uri, build_uri, encode_query, parse_uri, UpiParameterSet};

use crate::{
    consts,
    errors::LinkError,
    registry::{AppRegistry, AppRegistryEntry},
};

/// Options for [`build_app_link`].
#[derive(Clone, Debug)]
pub struct LinkRequest {
    /// Registry id of the target app, e.g. `"gpay"`
    pub app_id: String,
    pub platform: Platform,
    /// Action used when building from `upi_params` (defaults to `pay`);
    /// when `upi_uri` is also given the two must agree
    pub action: Option<UpiAction>,
    /// A pre-built `upi://` URI, used verbatim as the link source
    pub upi_uri: Option<String>,
    /// Parameters to build the URI from when no `upi_uri` is given
    pub upi_params: Option<UpiParameterSet>,
    /// Caller-supplied fallback URL, preferred over the store URL
    pub fallback_url: Option<String>,
    /// Android only: whether to embed a browser fallback in the intent URL
    pub include_fallback: bool,
}

impl Default for LinkRequest {
    fn default() -> Self {
        Self {
            app_id: UpiApp::Generic.to_string(),
            platform: Platform::Android,
            action: None,
            upi_uri: None,
            upi_params: None,
            fallback_url: None,
            include_fallback: true,
        }
    }
}

/// Denormalized app info carried on every generated link.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppMetadata {
    pub id: UpiApp,
    pub label: String,
    pub verified: bool,
}

/// A generated deep link. Created fresh per call; carries no identity
/// beyond its fields.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedLink {
    pub url: String,
    pub fallback_url: Option<String>,
    pub app: AppMetadata,
    pub platform: Platform,
    pub action: UpiAction,
}

/// Generate a platform-native deep link against the process-wide registry.
pub fn build_app_link(request: &LinkRequest) -> CustomResult<GeneratedLink, LinkError> {
    build_app_link_with(AppRegistry::global(), request)
}

/// Same as [`build_app_link`] with an injected registry.
#[tracing::instrument(skip_all, fields(app_id = %request.app_id, platform = %request.platform))]
pub fn build_app_link_with(
    registry: &AppRegistry,
    request: &LinkRequest,
) -> CustomResult<GeneratedLink, LinkError> {
    let app_id = UpiApp::from_str(&request.app_id)
        .map_err(|_| Report::new(LinkError::AppNotFound(request.app_id.clone())))?;
    let entry = registry
        .get_app(app_id)
        .ok_or_else(|| Report::new(LinkError::AppNotFound(request.app_id.clone())))?;

    let base_uri = match (&request.upi_uri, &request.upi_params) {
        (Some(uri), _) => uri.clone(),
        (None, Some(params)) => build_uri(params, request.action.unwrap_or_default())
            .change_context(LinkError::InvalidParameters)?,
        (None, None) => return Err(Report::new(LinkError::MissingLinkSource)),
    };

    // Round-trip through the parser to obtain the canonical query; an
    // invalid `upi_uri` argument surfaces its parse error here.
    let parsed = parse_uri(&base_uri).change_context(LinkError::InvalidUri)?;
    if request.upi_uri.is_some() {
        if let Some(requested) = request.action {
            if requested != parsed.action {
                return Err(Report::new(LinkError::ActionMismatch {
                    requested,
                    in_uri: parsed.action,
                }));
            }
        }
    }
    let action = parsed.action;
    let query = encode_query(&parsed.params);

    if let Some(pa) = parsed.params.pa.as_deref() {
        let payee = pii::Vpa::new_unchecked(pa.to_string());
        tracing::debug!(app = %entry.id, %action, payee = ?payee, "building app link");
    }

    let (url, fallback_url) = match request.platform {
        Platform::Android => build_android(entry, request, action, &query),
        Platform::Ios => build_ios(registry, entry, request, action, &query),
    };

    Ok(GeneratedLink {
        url,
        fallback_url,
        app: AppMetadata {
            id: entry.id,
            label: entry.label.clone(),
            verified: entry.verification == VerificationStatus::Verified,
        },
        platform: request.platform,
        action,
    })
}

/// Android: native intent syntax when a package is known, generic URI
/// otherwise. The fallback is embedded only when resolved and requested.
fn build_android(
    entry: &AppRegistryEntry,
    request: &LinkRequest,
    action: UpiAction,
    query: &str,
) -> (String, Option<String>) {
    let fallback = if request.include_fallback {
        request
            .fallback_url
            .clone()
            .or_else(|| entry.play_store_url.clone())
    } else {
        None
    };

    let Some(package) = entry.android_package.as_deref() else {
        return (assemble_uri(action, query), fallback);
    };

    let mut intent = format!("intent://{action}?{query}#Intent;scheme=upi;package={package}");
    if let Some(url) = fallback.as_deref() {
        // Encoded as a whole value so it survives inside the intent fragment.
        let encoded: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
        intent.push_str(";S.browser_fallback_url=");
        intent.push_str(&encoded);
    }
    intent.push_str(";end");
    (intent, fallback)
}

/// iOS: template substitution when the app documents a scheme, generic URI
/// otherwise. Installed-app detection is impossible on iOS, so a fallback
/// is always resolved regardless of `include_fallback`.
fn build_ios(
    registry: &AppRegistry,
    entry: &AppRegistryEntry,
    request: &LinkRequest,
    action: UpiAction,
    query: &str,
) -> (String, Option<String>) {
    let fallback = request
        .fallback_url
        .clone()
        .or_else(|| entry.app_store_url.clone());

    let url = match registry.get_link_template(entry.id, Platform::Ios, action) {
        Some(template) => template.replace(consts::QUERY_PLACEHOLDER, query),
        None => assemble_uri(action, query),
    };
    (url, fallback)
}
