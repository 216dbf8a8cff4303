//! Intent taxonomies for customer messages.
//!
//! A deployment routes messages through exactly one closed label set:
//! the general support desk ([`SupportIntent`]) or the sales desk
//! ([`SalesIntent`]). Both implement [`IntentLabel`], so the classifier and
//! persona registry are written once and instantiated per taxonomy. A label
//! from one taxonomy cannot be handed to the other's registry.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which intent taxonomy (and persona set) a process serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Deployment {
    /// billing / sales / technical_support / other.
    #[default]
    Support,
    /// new_customer / upgrade / device_inquiry / promotion / other.
    Sales,
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deployment::Support => write!(f, "support"),
            Deployment::Sales => write!(f, "sales"),
        }
    }
}

impl FromStr for Deployment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "support" => Ok(Deployment::Support),
            "sales" => Ok(Deployment::Sales),
            other => Err(format!("invalid deployment: '{other}'")),
        }
    }
}

/// A closed set of intent labels.
///
/// Implementors are fieldless enums whose discriminants match their position
/// in [`IntentLabel::ALL`]; [`IntentLabel::index`] relies on that to give
/// every label a dense slot in lookup tables.
pub trait IntentLabel:
    Copy
    + Eq
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = String>
    + Serialize
    + Send
    + Sync
    + 'static
{
    /// The deployment this taxonomy belongs to.
    const DEPLOYMENT: Deployment;

    /// Every label, in discriminant order.
    const ALL: &'static [Self];

    /// The label substituted whenever classification is ambiguous or fails.
    const CATCH_ALL: Self;

    /// Wire name of the label (e.g. `"technical_support"`).
    fn as_str(&self) -> &'static str;

    /// Dense index of the label within [`IntentLabel::ALL`].
    fn index(&self) -> usize;

    /// Comma-separated list of every wire name, for classifier prompts.
    fn label_list() -> String {
        Self::ALL
            .iter()
            .map(|label| label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Intent labels for the general support desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportIntent {
    Billing = 0,
    Sales = 1,
    TechnicalSupport = 2,
    Other = 3,
}

impl IntentLabel for SupportIntent {
    const DEPLOYMENT: Deployment = Deployment::Support;

    const ALL: &'static [Self] = &[
        SupportIntent::Billing,
        SupportIntent::Sales,
        SupportIntent::TechnicalSupport,
        SupportIntent::Other,
    ];

    const CATCH_ALL: Self = SupportIntent::Other;

    fn as_str(&self) -> &'static str {
        match self {
            SupportIntent::Billing => "billing",
            SupportIntent::Sales => "sales",
            SupportIntent::TechnicalSupport => "technical_support",
            SupportIntent::Other => "other",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SupportIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupportIntent {
    type Err = String;

    /// Exact match on the wire name. Callers normalize (trim, lowercase) first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "billing" => Ok(SupportIntent::Billing),
            "sales" => Ok(SupportIntent::Sales),
            "technical_support" => Ok(SupportIntent::TechnicalSupport),
            "other" => Ok(SupportIntent::Other),
            other => Err(format!("invalid support intent: '{other}'")),
        }
    }
}

/// Intent labels for the sales desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesIntent {
    NewCustomer = 0,
    Upgrade = 1,
    DeviceInquiry = 2,
    Promotion = 3,
    Other = 4,
}

impl IntentLabel for SalesIntent {
    const DEPLOYMENT: Deployment = Deployment::Sales;

    const ALL: &'static [Self] = &[
        SalesIntent::NewCustomer,
        SalesIntent::Upgrade,
        SalesIntent::DeviceInquiry,
        SalesIntent::Promotion,
        SalesIntent::Other,
    ];

    const CATCH_ALL: Self = SalesIntent::Other;

    fn as_str(&self) -> &'static str {
        match self {
            SalesIntent::NewCustomer => "new_customer",
            SalesIntent::Upgrade => "upgrade",
            SalesIntent::DeviceInquiry => "device_inquiry",
            SalesIntent::Promotion => "promotion",
            SalesIntent::Other => "other",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SalesIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalesIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new_customer" => Ok(SalesIntent::NewCustomer),
            "upgrade" => Ok(SalesIntent::Upgrade),
            "device_inquiry" => Ok(SalesIntent::DeviceInquiry),
            "promotion" => Ok(SalesIntent::Promotion),
            "other" => Ok(SalesIntent::Other),
            other => Err(format!("invalid sales intent: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_dense<I: IntentLabel>() {
        for (position, label) in I::ALL.iter().enumerate() {
            assert_eq!(label.index(), position, "{label} is out of order");
        }
        assert!(I::ALL.contains(&I::CATCH_ALL));
    }

    #[test]
    fn test_support_labels_are_dense() {
        assert_dense::<SupportIntent>();
    }

    #[test]
    fn test_sales_labels_are_dense() {
        assert_dense::<SalesIntent>();
    }

    #[test]
    fn test_support_intent_wire_names() {
        for label in SupportIntent::ALL {
            let parsed: SupportIntent = label.as_str().parse().unwrap();
            assert_eq!(*label, parsed);
        }
        let json = serde_json::to_string(&SupportIntent::TechnicalSupport).unwrap();
        assert_eq!(json, "\"technical_support\"");
    }

    #[test]
    fn test_sales_intent_serde_matches_display() {
        for label in SalesIntent::ALL {
            let json = serde_json::to_string(label).unwrap();
            assert_eq!(json, format!("\"{label}\""));
        }
    }

    #[test]
    fn test_from_str_is_exact() {
        assert!("Billing".parse::<SupportIntent>().is_err());
        assert!(" billing".parse::<SupportIntent>().is_err());
        assert!("billing-ish".parse::<SupportIntent>().is_err());
        assert!("promotion".parse::<SupportIntent>().is_err());
    }

    #[test]
    fn test_label_list() {
        assert_eq!(
            SupportIntent::label_list(),
            "billing, sales, technical_support, other"
        );
        assert_eq!(
            SalesIntent::label_list(),
            "new_customer, upgrade, device_inquiry, promotion, other"
        );
    }

    #[test]
    fn test_deployment_roundtrip() {
        for deployment in [Deployment::Support, Deployment::Sales] {
            let parsed: Deployment = deployment.to_string().parse().unwrap();
            assert_eq!(deployment, parsed);
        }
        assert_eq!(SupportIntent::DEPLOYMENT, Deployment::Support);
        assert_eq!(SalesIntent::DEPLOYMENT, Deployment::Sales);
    }
}
