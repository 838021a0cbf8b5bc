//! The app registry: per-app packages, templates and store URLs.
//!
//! Loaded once from the static data below and never mutated afterwards;
//! safe to share across threads without locking. A deployment that sources
//! its registry from configuration instead builds one with
//! [`AppRegistry::from_entries`] and passes it to
//! [`build_app_link_with`](crate::link::build_app_link_with).

use std::{collections::HashMap, sync::LazyLock};

use common_enums::{Platform, UpiAction, UpiApp, VerificationStatus};

/// Registry metadata for one UPI app.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppRegistryEntry {
    pub id: UpiApp,
    /// Human-readable app name
    pub label: String,
    /// Android package identifier; absent for the generic handler
    pub android_package: Option<String>,
    /// iOS pay-link template carrying the literal `{query}` placeholder
    pub ios_pay_template: Option<String>,
    /// iOS mandate-link template; no mainstream app documents one today
    pub ios_mandate_template: Option<String>,
    pub play_store_url: Option<String>,
    pub app_store_url: Option<String>,
    /// Whether the scheme/package data is vendor-documented
    pub verification: VerificationStatus,
}

/// Read-only lookup from app id to [`AppRegistryEntry`].
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct AppRegistry {
    entries: HashMap<UpiApp, AppRegistryEntry>,
}

impl AppRegistry {
    /// Build a registry from explicit entries, keyed by their id.
    pub fn from_entries(entries: impl IntoIterator<Item = AppRegistryEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|entry| (entry.id, entry)).collect(),
        }
    }

    /// The process-wide registry built from the static app data.
    pub fn global() -> &'static Self {
        &GLOBAL_REGISTRY
    }

    pub fn get_app(&self, id: UpiApp) -> Option<&AppRegistryEntry> {
        self.entries.get(&id)
    }

    /// The URL template for a platform/action pair, when one exists.
    /// Android never uses templates; intent URLs are assembled from the
    /// package identifier.
    pub fn get_link_template(
        &self,
        id: UpiApp,
        platform: Platform,
        action: UpiAction,
    ) -> Option<&str> {
        let entry = self.get_app(id)?;
        match (platform, action) {
            (Platform::Android, _) => None,
            (Platform::Ios, UpiAction::Pay) => entry.ios_pay_template.as_deref(),
            (Platform::Ios, UpiAction::Mandate) => entry.ios_mandate_template.as_deref(),
        }
    }

    pub fn get_store_url(&self, id: UpiApp, platform: Platform) -> Option<&str> {
        let entry = self.get_app(id)?;
        match platform {
            Platform::Android => entry.play_store_url.as_deref(),
            Platform::Ios => entry.app_store_url.as_deref(),
        }
    }
}

fn play_store_url(package: &str) -> String {
    format!("https://play.google.com/store/apps/details?id={package}")
}

static GLOBAL_REGISTRY: LazyLock<AppRegistry> = LazyLock::new(|| {
    AppRegistry::from_entries([
        AppRegistryEntry {
            id: UpiApp::Generic,
            label: "Any UPI app".to_string(),
            android_package: None,
            ios_pay_template: None,
            ios_mandate_template: None,
            play_store_url: None,
            app_store_url: None,
            verification: VerificationStatus::Verified,
        },
        AppRegistryEntry {
            id: UpiApp::Gpay,
            label: "Google Pay".to_string(),
            android_package: Some("com.google.android.apps.nbu.paisa.user".to_string()),
            ios_pay_template: Some("tez://upi/pay?{query}".to_string()),
            ios_mandate_template: None,
            play_store_url: Some(play_store_url("com.google.android.apps.nbu.paisa.user")),
            app_store_url: Some(
                "https://apps.apple.com/in/app/google-pay/id1193357041".to_string(),
            ),
            verification: VerificationStatus::Verified,
        },
        AppRegistryEntry {
            id: UpiApp::Phonepe,
            label: "PhonePe".to_string(),
            android_package: Some("com.phonepe.app".to_string()),
            ios_pay_template: Some("phonepe://pay?{query}".to_string()),
            ios_mandate_template: None,
            play_store_url: Some(play_store_url("com.phonepe.app")),
            app_store_url: Some("https://apps.apple.com/in/app/phonepe/id1170055821".to_string()),
            verification: VerificationStatus::Verified,
        },
        AppRegistryEntry {
            id: UpiApp::Paytm,
            label: "Paytm".to_string(),
            android_package: Some("net.one97.paytm".to_string()),
            ios_pay_template: Some("paytmmp://pay?{query}".to_string()),
            ios_mandate_template: None,
            play_store_url: Some(play_store_url("net.one97.paytm")),
            app_store_url: Some("https://apps.apple.com/in/app/paytm/id473941634".to_string()),
            verification: VerificationStatus::Verified,
        },
        AppRegistryEntry {
            id: UpiApp::Bhim,
            label: "BHIM".to_string(),
            android_package: Some("in.org.npci.upiapp".to_string()),
            ios_pay_template: Some("bhim://upi/pay?{query}".to_string()),
            ios_mandate_template: None,
            play_store_url: Some(play_store_url("in.org.npci.upiapp")),
            app_store_url: Some("https://apps.apple.com/in/app/bhim/id1200315258".to_string()),
            verification: VerificationStatus::Verified,
        },
        AppRegistryEntry {
            id: UpiApp::Amazonpay,
            label: "Amazon Pay".to_string(),
            android_package: Some("in.amazon.mShop.android.shopping".to_string()),
            ios_pay_template: Some("amzn://upi/pay?{query}".to_string()),
            ios_mandate_template: None,
            play_store_url: Some(play_store_url("in.amazon.mShop.android.shopping")),
            app_store_url: None,
            verification: VerificationStatus::CommunityObserved,
        },
    ])
});
