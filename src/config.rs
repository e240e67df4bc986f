use std::fs;

use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    entities::KnownTaxType,
    errors::{InvalidConfig, InvalidRon, ReadError},
    ext::standard_taxes::standard_catalog,
};

/// What the due-date resolver does with a competence period outside the
/// plausible range (month outside 1..=12, or year outside
/// `min_year..=max_year`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde_derive::Deserialize)]
pub enum FallbackDueDatePolicy {
    /// Use the last day of the month following competence, ignoring the
    /// configured due day.
    #[default]
    FallbackToMonthEnd,
    /// Return a `ValidationError`.
    Reject,
}

/// Engine configuration, written in RON:
///
/// ```ron
/// (
///     known_tax_types: [
///         (code: "DAS", description: "Documento de Arrecadação do Simples Nacional"),
///     ],
///     due_date_policy: Reject,
///     min_year: 2020,
///     max_year: 2100,
/// )
/// ```
///
/// Missing fields take their defaults.
#[derive(Debug, Clone, serde_derive::Deserialize)]
#[serde(default)]
pub struct SgotConfig {
    pub known_tax_types: Vec<KnownTaxType>,
    pub due_date_policy: FallbackDueDatePolicy,
    pub min_year: i32,
    pub max_year: i32,
}

impl Default for SgotConfig {
    fn default() -> Self {
        Self {
            known_tax_types: standard_catalog(),
            due_date_policy: FallbackDueDatePolicy::default(),
            min_year: 2020,
            max_year: 2100,
        }
    }
}

impl SgotConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        let config: SgotConfig = from_str(s).map_err(|e| InvalidRon::with_debug("SgotConfig", &e))?;
        config.validated()
    }

    pub fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        Self::from_ron_str(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }

    fn validated(self) -> Result<Self, ServerError> {
        if self.min_year > self.max_year {
            return Err(InvalidConfig::new(&format!(
                "min_year ({}) is after max_year ({})",
                self.min_year, self.max_year
            )));
        }
        if let Some(empty) = self.known_tax_types.iter().find(|t| t.code.as_str().is_empty()) {
            return Err(InvalidConfig::new(&format!(
                "known tax type with empty code ('{}')",
                empty.description
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SgotConfig::from_ron_str("()").unwrap();
        assert_eq!(config.due_date_policy, FallbackDueDatePolicy::FallbackToMonthEnd);
        assert_eq!(config.min_year, 2020);
        assert_eq!(config.max_year, 2100);
        let codes: Vec<_> = config
            .known_tax_types
            .iter()
            .map(|t| t.code.as_str().to_string())
            .collect();
        assert_eq!(codes, vec!["DAS", "ISS_RETIDO", "FGTS", "DCTFWeb"]);
    }

    #[test]
    fn overrides_policy_and_catalog() {
        let config = SgotConfig::from_ron_str(
            r#"(
                known_tax_types: [(code: "DAS", description: "Simples")],
                due_date_policy: Reject,
            )"#,
        )
        .unwrap();
        assert_eq!(config.due_date_policy, FallbackDueDatePolicy::Reject);
        assert_eq!(config.known_tax_types.len(), 1);
        assert_eq!(config.known_tax_types[0].description, "Simples");
    }

    #[test]
    fn rejects_inverted_year_range() {
        assert!(SgotConfig::from_ron_str("(min_year: 2100, max_year: 2020)").is_err());
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(SgotConfig::from_ron_str("(due_date_policy: Sometimes)").is_err());
    }
}
