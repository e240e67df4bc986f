use fractic_server_error::ServerError;

use crate::{
    entities::{Capability, Role, RoleLevel},
    errors::Forbidden,
};

pub fn has_capability(role: Role, capability: Capability) -> bool {
    use Capability::*;
    match role {
        Role::Accounting(RoleLevel::Admin) => true,
        Role::Accounting(RoleLevel::Normal) => {
            !matches!(capability, ConfigureTaxCalendar | ManageUsers)
        }
        Role::Client(RoleLevel::Admin) => matches!(
            capability,
            ViewOwnCompany | UploadDocument | MarkNotApplicable | ManageOwnCompanyUsers
        ),
        Role::Client(RoleLevel::Normal) => matches!(capability, ViewOwnCompany | UploadDocument),
    }
}

pub fn require_capability(role: Role, capability: Capability) -> Result<(), ServerError> {
    if has_capability(role, capability) {
        Ok(())
    } else {
        Err(Forbidden::new(
            &role.to_string(),
            &format!("{:?}", capability),
        ))
    }
}
