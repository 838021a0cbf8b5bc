//! Consolidated constants for the UPI deep-link service

// =============================================================================
// UPI Query Field Names
// =============================================================================

/// Payee virtual payment address (`user@psp`)
pub const PAYEE_ADDRESS: &str = "pa";
/// Payee display name
pub const PAYEE_NAME: &str = "pn";
/// Transaction amount in rupees, up to two decimal places
pub const AMOUNT: &str = "am";
/// ISO currency code; UPI only carries INR
pub const CURRENCY: &str = "cu";
/// Transaction reference
pub const TXN_REF: &str = "tr";
/// Free-text transaction note
pub const TXN_NOTE: &str = "tn";
/// Reference URL attached to the transaction
pub const REF_URL: &str = "url";
/// Payment mode hint
pub const MODE: &str = "mode";
/// Originating organisation id
pub const ORG_ID: &str = "orgid";
/// Opaque signature blob; carried, never produced or checked here
pub const SIGNATURE: &str = "sign";
/// Merchant category code
pub const MERCHANT_CODE: &str = "mc";
/// Terminal id
pub const TERMINAL_ID: &str = "tid";

/// Query emission order on the wire. `sign` trails `tid` in NPCI link
/// captures; downstream consumers are tested against this exact order, so it
/// is load-bearing even where it looks inconsistent with the field table.
pub const CANONICAL_FIELD_ORDER: [&str; 12] = [
    PAYEE_ADDRESS,
    PAYEE_NAME,
    AMOUNT,
    CURRENCY,
    TXN_REF,
    TXN_NOTE,
    REF_URL,
    MODE,
    ORG_ID,
    MERCHANT_CODE,
    TERMINAL_ID,
    SIGNATURE,
];

// =============================================================================
// Field Length Limits
// =============================================================================

/// Maximum length of a payee address
pub const MAX_PAYEE_ADDRESS_LENGTH: usize = 255;
/// Maximum length of a payee name
pub const MAX_PAYEE_NAME_LENGTH: usize = 99;
/// Maximum length of an amount string
pub const MAX_AMOUNT_LENGTH: usize = 18;
/// Maximum length of a transaction reference
pub const MAX_TXN_REF_LENGTH: usize = 35;
/// Maximum length of a transaction note
pub const MAX_TXN_NOTE_LENGTH: usize = 100;
/// Maximum length of a reference URL
pub const MAX_REF_URL_LENGTH: usize = 200;
/// Maximum length of a mode hint
pub const MAX_MODE_LENGTH: usize = 20;
/// Maximum length of an organisation id
pub const MAX_ORG_ID_LENGTH: usize = 20;
/// Maximum length of a signature blob
pub const MAX_SIGNATURE_LENGTH: usize = 500;
/// Maximum length of a terminal id
pub const MAX_TERMINAL_ID_LENGTH: usize = 35;

// =============================================================================
// Wire Format
// =============================================================================

/// The only scheme a UPI link may carry
pub const UPI_SCHEME: &str = "upi";
/// The only currency UPI links may carry
pub const INR: &str = "INR";
