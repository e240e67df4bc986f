use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleLevel {
    Admin,
    Normal,
}

/// User role. Accounting-firm staff see every company; client users only
/// their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Accounting(RoleLevel),
    Client(RoleLevel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewAllCompanies,
    ViewOwnCompany,
    ManageCompanies,
    ManageUsers,
    ManageOwnCompanyUsers,
    ConfigureTaxCalendar,
    CreateObligation,
    UploadDocument,
    MarkNotApplicable,
    ConfirmPayment,
}

impl Role {
    pub fn is_accounting(&self) -> bool {
        matches!(self, Role::Accounting(_))
    }

    pub fn is_client(&self) -> bool {
        matches!(self, Role::Client(_))
    }
}

/// Parses "ACCOUNTING_ADMIN", "CLIENT_NORMAL", etc.
impl FromStr for Role {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::new("role", &format!("unknown role '{}'", s));
        let (side, level) = s.trim().split_once('_').ok_or_else(invalid)?;
        let level = match level {
            "ADMIN" => RoleLevel::Admin,
            "NORMAL" => RoleLevel::Normal,
            _ => return Err(invalid()),
        };
        match side {
            "ACCOUNTING" => Ok(Role::Accounting(level)),
            "CLIENT" => Ok(Role::Client(level)),
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (side, level) = match self {
            Role::Accounting(l) => ("ACCOUNTING", l),
            Role::Client(l) => ("CLIENT", l),
        };
        let level = match level {
            RoleLevel::Admin => "ADMIN",
            RoleLevel::Normal => "NORMAL",
        };
        write!(f, "{}_{}", side, level)
    }
}
