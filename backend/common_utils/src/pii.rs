//! Personal Identifiable Information protection.

use std::{fmt, ops, str::FromStr};

use hyperswitch_masking::{ExposeInterface, Secret, Strategy, WithType};

use crate::errors::ValidationError;

/// Strategy for masking UPI VPA's
#[derive(Debug, Copy, Clone)]
pub enum UpiVpaMaskingStrategy {}

impl<T> Strategy<T> for UpiVpaMaskingStrategy
where
    T: AsRef<str> + fmt::Debug,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vpa_str: &str = val.as_ref();
        if let Some((user_identifier, bank_or_psp)) = vpa_str.split_once('@') {
            let masked_user_identifier = "*".repeat(user_identifier.len());
            write!(f, "{masked_user_identifier}@{bank_or_psp}")
        } else {
            WithType::fmt(val, f)
        }
    }
}

/// A virtual payment address, masked wherever it is printed.
///
/// Only the `local@psp` shape is checked here; the full NPCI grammar lives in
/// the parameter engine's rule table.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "String")]
pub struct Vpa(Secret<String, UpiVpaMaskingStrategy>);

impl Vpa {
    /// Wrap an already-validated address without re-checking it.
    pub fn new_unchecked(vpa: String) -> Self {
        Self(Secret::new(vpa))
    }
}

impl ExposeInterface<Secret<String, UpiVpaMaskingStrategy>> for Vpa {
    fn expose(self) -> Secret<String, UpiVpaMaskingStrategy> {
        self.0
    }
}

impl TryFrom<String> for Vpa {
    type Error = error_stack::Report<ValidationError>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl ops::Deref for Vpa {
    type Target = Secret<String, UpiVpaMaskingStrategy>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Vpa {
    type Err = error_stack::Report<ValidationError>;

    fn from_str(vpa: &str) -> Result<Self, Self::Err> {
        match vpa.split_once('@') {
            Some((local, psp)) if !local.is_empty() && !psp.is_empty() => {
                Ok(Self(Secret::new(vpa.to_string())))
            }
            _ => Err(ValidationError::InvalidValue {
                message: "Invalid virtual payment address format".into(),
            }
            .into()),
        }
    }
}
