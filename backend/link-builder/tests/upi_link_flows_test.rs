#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use common_enums::{LinkStrategy, Platform, UpiAction, UpiApp};
    use link_builder::{
        best_link_strategy, build_app_link, detect_platform, qr_payload, AppRegistry,
        LinkRequest,
    };
    use upi_params::{build_uri, parse_uri, validate, UpiParameterSet};

    fn checkout_params() -> UpiParameterSet {
        UpiParameterSet::from_pairs([
            ("pa", "store@okhdfcbank"),
            ("pn", "Corner Store"),
            ("am", "1250.50"),
            ("tr", "INV-2024-0042"),
            ("tn", "Invoice 42"),
        ])
    }

    #[test]
    fn full_flow_params_to_android_intent() {
        // Build the URI the way a checkout page would, then hand it to the
        // link builder for the device that scanned the page.
        let uri = build_uri(&checkout_params(), UpiAction::Pay).unwrap();
        assert!(uri.starts_with("upi://pay?pa=store%40okhdfcbank&pn=Corner+Store&am=1250.50&cu=INR"));

        let link = build_app_link(&LinkRequest {
            app_id: "gpay".to_string(),
            platform: Platform::Android,
            upi_uri: Some(uri.clone()),
            ..Default::default()
        })
        .unwrap();

        assert!(link.url.starts_with("intent://pay?"));
        assert!(link.url.contains("package=com.google.android.apps.nbu.paisa.user"));
        assert!(link.url.contains("scheme=upi"));
        assert!(link.url.ends_with(";end"));
        assert!(link.app.verified);
        assert_eq!(link.action, UpiAction::Pay);

        // The same URI renders as a QR payload for desktop checkout.
        assert_eq!(qr_payload(&uri).unwrap(), uri);
    }

    #[test]
    fn full_flow_strategy_selection_drives_the_platform_choice() {
        let android_chrome = "Mozilla/5.0 (Linux; Android 14) AppleWebKit/537.36 Chrome/120.0 Mobile";
        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Safari/604.1";

        assert_eq!(best_link_strategy(Some(android_chrome)), LinkStrategy::Intent);
        assert_eq!(best_link_strategy(Some(iphone)), LinkStrategy::Scheme);

        let platform = detect_platform(Some(iphone));
        let link = build_app_link(&LinkRequest {
            app_id: "phonepe".to_string(),
            platform,
            upi_params: Some(checkout_params()),
            ..Default::default()
        })
        .unwrap();
        assert!(link.url.starts_with("phonepe://pay?pa=store%40okhdfcbank"));
        assert!(link.fallback_url.is_some());
    }

    #[test]
    fn mandate_round_trip_survives_the_builder() {
        let uri = build_uri(&checkout_params(), UpiAction::Mandate).unwrap();
        let parsed = parse_uri(&uri).unwrap();
        assert_eq!(parsed.action, UpiAction::Mandate);
        assert_eq!(parsed.params, validate(&checkout_params()).normalized);

        let link = build_app_link(&LinkRequest {
            app_id: "bhim".to_string(),
            platform: Platform::Android,
            upi_uri: Some(uri),
            ..Default::default()
        })
        .unwrap();
        assert!(link.url.starts_with("intent://mandate?"));
        assert_eq!(link.action, UpiAction::Mandate);
    }

    #[test]
    fn registry_lookups_expose_the_documented_interface() {
        let registry = AppRegistry::global();
        let entry = registry.get_app(UpiApp::Paytm).unwrap();
        assert_eq!(entry.label, "Paytm");
        assert_eq!(entry.android_package.as_deref(), Some("net.one97.paytm"));
        assert_eq!(
            registry.get_link_template(UpiApp::Paytm, Platform::Ios, UpiAction::Pay),
            Some("paytmmp://pay?{query}")
        );
        assert_eq!(
            registry.get_link_template(UpiApp::Paytm, Platform::Android, UpiAction::Pay),
            None
        );
        assert!(registry
            .get_store_url(UpiApp::Paytm, Platform::Android)
            .is_some_and(|url| url.contains("play.google.com")));
    }

    #[test]
    fn generated_links_serialize_for_api_responses() {
        let link = build_app_link(&LinkRequest {
            app_id: "gpay".to_string(),
            platform: Platform::Ios,
            upi_params: Some(checkout_params()),
            ..Default::default()
        })
        .unwrap();

        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(value["app"]["id"], "gpay");
        assert_eq!(value["app"]["verified"], true);
        assert_eq!(value["platform"], "ios");
        assert_eq!(value["action"], "pay");
        assert!(value["url"].as_str().unwrap().starts_with("tez://upi/pay?"));
    }
}
