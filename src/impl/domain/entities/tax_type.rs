/// Code identifying a kind of tax obligation (ex. "DAS", "ISS_RETIDO").
///
/// Codes are compared verbatim. "DCTFWeb" keeps its mixed case since that is
/// how the persisted configuration stores it.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, serde_derive::Deserialize)]
#[serde(transparent)]
pub struct TaxType(pub(crate) String);

impl TaxType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn tax_type(code: impl Into<String>) -> TaxType {
    TaxType(code.into())
}

impl std::fmt::Display for TaxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TaxType {
    fn from(s: &str) -> Self {
        TaxType(s.trim().to_string())
    }
}

/// A tax type the system knows about regardless of whether it has been
/// configured yet.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
pub struct KnownTaxType {
    pub code: TaxType,
    pub description: String,
}
