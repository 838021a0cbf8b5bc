//! The UPI parameter set: typed slots for the recognized NPCI fields plus an
//! ordered passthrough map for everything else.

use common_utils::consts;

/// A mapping of UPI query fields to string values.
///
/// Recognized fields occupy typed slots; unrecognized keys are kept in
/// [`additional`](Self::additional) in insertion order so forward-compatible
/// parameters survive a round trip untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpiParameterSet {
    /// Payee address (VPA), `user@psp`
    pub pa: Option<String>,
    /// Payee name
    pub pn: Option<String>,
    /// Amount
    pub am: Option<String>,
    /// Currency
    pub cu: Option<String>,
    /// Transaction reference
    pub tr: Option<String>,
    /// Transaction note
    pub tn: Option<String>,
    /// Reference URL
    pub url: Option<String>,
    /// Payment mode
    pub mode: Option<String>,
    /// Organisation id
    pub orgid: Option<String>,
    /// Signature blob, carried opaquely
    pub sign: Option<String>,
    /// Merchant category code
    pub mc: Option<String>,
    /// Terminal id
    pub tid: Option<String>,
    /// Unrecognized keys in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<(String, String)>,
}

impl UpiParameterSet {
    /// Build a set from arbitrary key/value pairs. Known keys land in their
    /// typed slot, later duplicates winning; unknown keys append to
    /// `additional`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut set = Self::default();
        for (key, value) in pairs {
            set.set(key.into(), value.into());
        }
        set
    }

    /// Store a value under its wire key.
    pub fn set(&mut self, key: String, value: String) {
        match key.as_str() {
            consts::PAYEE_ADDRESS => self.pa = Some(value),
            consts::PAYEE_NAME => self.pn = Some(value),
            consts::AMOUNT => self.am = Some(value),
            consts::CURRENCY => self.cu = Some(value),
            consts::TXN_REF => self.tr = Some(value),
            consts::TXN_NOTE => self.tn = Some(value),
            consts::REF_URL => self.url = Some(value),
            consts::MODE => self.mode = Some(value),
            consts::ORG_ID => self.orgid = Some(value),
            consts::SIGNATURE => self.sign = Some(value),
            consts::MERCHANT_CODE => self.mc = Some(value),
            consts::TERMINAL_ID => self.tid = Some(value),
            _ => self.additional.push((key, value)),
        }
    }

    /// Look up a value by wire key, checking typed slots first.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.known_value(key).or_else(|| {
            self.additional
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        })
    }

    /// The value of a recognized field, `None` for unrecognized keys.
    pub(crate) fn known_value(&self, key: &str) -> Option<&str> {
        let slot = match key {
            consts::PAYEE_ADDRESS => &self.pa,
            consts::PAYEE_NAME => &self.pn,
            consts::AMOUNT => &self.am,
            consts::CURRENCY => &self.cu,
            consts::TXN_REF => &self.tr,
            consts::TXN_NOTE => &self.tn,
            consts::REF_URL => &self.url,
            consts::MODE => &self.mode,
            consts::ORG_ID => &self.orgid,
            consts::SIGNATURE => &self.sign,
            consts::MERCHANT_CODE => &self.mc,
            consts::TERMINAL_ID => &self.tid,
            _ => return None,
        };
        slot.as_deref()
    }

    /// Recognized fields that are present, in canonical wire order.
    pub fn known_pairs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        consts::CANONICAL_FIELD_ORDER
            .iter()
            .filter_map(move |key| self.known_value(key).map(|value| (*key, value)))
    }

    /// Every field in wire emission order: canonical fields first, then the
    /// passthrough keys as they were inserted.
    pub fn canonical_pairs(&self) -> Vec<(&str, &str)> {
        self.known_pairs()
            .chain(
                self.additional
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str())),
            )
            .collect()
    }

    /// True when no field, recognized or otherwise, holds a value.
    pub fn is_empty(&self) -> bool {
        self.known_pairs().next().is_none() && self.additional.is_empty()
    }
}
