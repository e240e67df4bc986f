use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{entities::ObligationStatus, errors::InvalidBoolean};

#[derive(Debug)]
pub(crate) struct ObligationStatusModel(ObligationStatus);

impl FromStr for ObligationStatusModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ObligationStatusModel(match s.trim().to_uppercase().as_str() {
            "PENDING" => ObligationStatus::Pending,
            "SUBMITTED" => ObligationStatus::Submitted,
            "PAID" => ObligationStatus::Paid,
            "NOT_APPLICABLE" => ObligationStatus::NotApplicable,
            _ => ObligationStatus::Other(s.trim().to_string()),
        }))
    }
}

impl Into<ObligationStatus> for ObligationStatusModel {
    fn into(self) -> ObligationStatus {
        self.0
    }
}

/// Boolean column; empty means false.
#[derive(Debug)]
pub(crate) struct FlagModel(pub bool);

impl FromStr for FlagModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "sim" => Ok(FlagModel(true)),
            "false" | "0" | "no" | "nao" | "não" | "" => Ok(FlagModel(false)),
            _ => Err(InvalidBoolean::new(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_are_case_insensitive() {
        let s: ObligationStatus = ObligationStatusModel::from_str("paid").unwrap().into();
        assert_eq!(s, ObligationStatus::Paid);
        let s: ObligationStatus = ObligationStatusModel::from_str("NOT_APPLICABLE")
            .unwrap()
            .into();
        assert_eq!(s, ObligationStatus::NotApplicable);
    }

    #[test]
    fn unknown_status_is_preserved() {
        let s: ObligationStatus = ObligationStatusModel::from_str("CANCELED").unwrap().into();
        assert_eq!(s, ObligationStatus::Other("CANCELED".to_string()));
    }

    #[test]
    fn flags() {
        assert!(FlagModel::from_str("true").unwrap().0);
        assert!(!FlagModel::from_str("").unwrap().0);
        assert!(FlagModel::from_str("maybe").is_err());
    }
}
