//! Identifier casing policy.

use crate::error::ConfigError;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Casing applied to every emitted identifier of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasingPolicy {
    /// Identifiers are emitted as reported.
    #[default]
    Verbatim,
    /// `user_accounts` becomes `userAccounts`.
    #[serde(alias = "camelcase")]
    Camel,
    /// `user_accounts` becomes `UserAccounts`.
    #[serde(alias = "pascalcase")]
    Pascal,
}

impl CasingPolicy {
    /// Applies the policy to a raw identifier.
    #[must_use]
    pub fn apply(&self, identifier: &str) -> String {
        match self {
            Self::Verbatim => identifier.to_string(),
            Self::Camel => split_words(identifier).to_case(Case::Camel),
            Self::Pascal => split_words(identifier).to_case(Case::Pascal),
        }
    }
}

impl FromStr for CasingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbatim" | "none" => Ok(Self::Verbatim),
            "camel" | "camelcase" => Ok(Self::Camel),
            "pascal" | "pascalcase" => Ok(Self::Pascal),
            _ => Err(ConfigError::UnknownCasing {
                value: s.to_string(),
            }),
        }
    }
}

/// Replaces every non-alphanumeric character with a word separator.
fn split_words(identifier: &str) -> String {
    identifier
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbatim() {
        assert_eq!(CasingPolicy::Verbatim.apply("user_accounts"), "user_accounts");
        assert_eq!(CasingPolicy::Verbatim.apply("Weird Name"), "Weird Name");
    }

    #[test]
    fn test_pascal() {
        assert_eq!(CasingPolicy::Pascal.apply("user_accounts"), "UserAccounts");
        assert_eq!(CasingPolicy::Pascal.apply("created_at"), "CreatedAt");
        assert_eq!(CasingPolicy::Pascal.apply("order-type"), "OrderType");
        assert_eq!(CasingPolicy::Pascal.apply("UserAccountsType"), "UserAccountsType");
    }

    #[test]
    fn test_camel() {
        assert_eq!(CasingPolicy::Camel.apply("user_accounts"), "userAccounts");
        assert_eq!(CasingPolicy::Camel.apply("author id"), "authorId");
        assert_eq!(CasingPolicy::Camel.apply("id"), "id");
    }

    #[test]
    fn test_splits_on_punctuation() {
        assert_eq!(CasingPolicy::Pascal.apply("billing.invoice"), "BillingInvoice");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("pascal".parse::<CasingPolicy>(), Ok(CasingPolicy::Pascal));
        assert_eq!("CamelCase".parse::<CasingPolicy>(), Ok(CasingPolicy::Camel));
        assert_eq!("verbatim".parse::<CasingPolicy>(), Ok(CasingPolicy::Verbatim));
        assert!("kebab".parse::<CasingPolicy>().is_err());
    }

    #[test]
    fn test_deserialize() {
        let policy: CasingPolicy = serde_json::from_str("\"camel\"").expect("Failed to parse");
        assert_eq!(policy, CasingPolicy::Camel);
    }
}
