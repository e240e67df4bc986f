use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::InvalidIsoDate;

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);

impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Prisma exports timestamps ("2025-02-20T00:00:00.000Z"); only the date
        // part is meaningful for a due date.
        let date_part = s.trim().get(..10).unwrap_or(s.trim());
        let d = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}

impl<'de> Deserialize<'de> for ISODateModel {
    fn deserialize<D>(deserializer: D) -> Result<ISODateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISODateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Into<NaiveDate> for ISODateModel {
    fn into(self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_timestamp_dates() {
        let expected = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
        let plain: NaiveDate = ISODateModel::from_str("2025-02-20").unwrap().into();
        let stamped: NaiveDate = ISODateModel::from_str("2025-02-20T00:00:00.000Z")
            .unwrap()
            .into();
        assert_eq!(plain, expected);
        assert_eq!(stamped, expected);
    }

    #[test]
    fn rejects_invalid_dates() {
        assert!(ISODateModel::from_str("2025-02-30").is_err());
        assert!(ISODateModel::from_str("20/02/2025").is_err());
        assert!(ISODateModel::from_str("").is_err());
    }
}
