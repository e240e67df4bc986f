use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidAmount;

/// Obligation amount as exported. Accepts plain decimals ("1234.56") and
/// pt-BR formatting ("R$ 1.234,56"). Empty input is a null amount.
#[derive(Debug)]
pub(crate) struct AmountModel(pub Option<f64>);

impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().trim_start_matches("R$").trim();
        if raw.is_empty() {
            return Ok(AmountModel(None));
        }
        // A comma means pt-BR: '.' groups thousands, ',' marks decimals. A '.'
        // after the last ',' is English grouping ("1,234.56") and ambiguous.
        let normalized = if let Some(comma) = raw.rfind(',') {
            if raw[comma..].contains('.') {
                return Err(InvalidAmount::new(s));
            }
            raw.replace('.', "").replace(',', ".")
        } else {
            raw.to_string()
        };
        let amount = normalized
            .parse::<f64>()
            .map_err(|_| InvalidAmount::new(s))?;
        if !amount.is_finite() {
            return Err(InvalidAmount::new(s));
        }
        Ok(AmountModel(Some(amount)))
    }
}

impl Into<Option<f64>> for AmountModel {
    fn into(self) -> Option<f64> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Option<f64> {
        AmountModel::from_str(s).unwrap().into()
    }

    #[test]
    fn parses_plain_and_brazilian_formats() {
        assert_eq!(parse("1234.56"), Some(1234.56));
        assert_eq!(parse("1.234,56"), Some(1234.56));
        assert_eq!(parse("R$ 987,10"), Some(987.10));
        assert_eq!(parse("0"), Some(0.0));
    }

    #[test]
    fn empty_is_null() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("  "), None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(AmountModel::from_str("abc").is_err());
        assert!(AmountModel::from_str("NaN").is_err());
    }

    #[test]
    fn rejects_english_grouping() {
        assert!(AmountModel::from_str("1,234.56").is_err());
        assert!(AmountModel::from_str("R$ 12,345.00").is_err());
        assert_eq!(parse("12.345,00"), Some(12345.0));
    }
}
