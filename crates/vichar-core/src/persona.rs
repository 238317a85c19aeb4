//! Response personas for the AI collaborator.
//!
//! A persona is a named response style the collaborator is asked to adopt.
//! The set is fixed: the Refinery phase deliberately forces the critical
//! persona as a UX nudge, so personas are a closed enumeration rather than
//! user-defined entities.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A named response style/perspective for assistant replies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Persona {
    /// Balanced advisor; the default for new sessions.
    Neutral,
    /// Cynical investor voice used for the Refinery critique phase.
    Critical,
    /// Numbers-first perspective for viability and unit-economics questions.
    FinancialAnalyst,
}

impl Default for Persona {
    fn default() -> Self {
        Persona::Neutral
    }
}

impl Persona {
    /// Human-readable name shown in the UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::Neutral => "Advisor",
            Persona::Critical => "Critical Investor",
            Persona::FinancialAnalyst => "Financial Analyst",
        }
    }

    /// One-line style descriptor passed to the collaborator as a hint.
    pub fn brief(&self) -> &'static str {
        match self {
            Persona::Neutral => {
                "Balanced and encouraging. Explores the idea on its own terms \
                 and asks clarifying questions before judging."
            }
            Persona::Critical => {
                "Skeptical investor. Probes weaknesses, challenges assumptions, \
                 and demands evidence for every claim."
            }
            Persona::FinancialAnalyst => {
                "Quantitative and precise. Frames everything in terms of costs, \
                 margins, and cash flow."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_is_neutral() {
        assert_eq!(Persona::default(), Persona::Neutral);
    }

    #[test]
    fn test_string_round_trip() {
        assert_eq!(Persona::Critical.to_string(), "critical");
        assert_eq!(
            Persona::from_str("financial_analyst").unwrap(),
            Persona::FinancialAnalyst
        );
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Persona::FinancialAnalyst).unwrap();
        assert_eq!(json, "\"financial_analyst\"");
    }
}
