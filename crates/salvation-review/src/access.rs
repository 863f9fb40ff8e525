//! Role checks for the review screen.
//!
//! The screen only asks two questions: may this user edit people, and may they open a person's
//! detail page. Everything else about authorization belongs to the host application.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    /// General record editing; gates access to the review area as a whole.
    Edit,
    UserEdit,
    UserView,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Edit => "ROLE_EDIT",
            Permission::UserEdit => "ROLE_USER_EDIT",
            Permission::UserView => "ROLE_USER_VIEW",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user, as far as role checks are concerned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub roles: Vec<String>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            roles: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    pub fn with_permission(self, permission: Permission) -> Self {
        self.with_role(permission.as_str())
    }
}

pub fn has_role(user: &User, permission: Permission) -> bool {
    user.roles.iter().any(|r| r == permission.as_str())
}

pub fn has_any_role(user: &User, permissions: &[Permission]) -> bool {
    permissions.iter().any(|&p| has_role(user, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_matched_by_name() {
        let user = User::new("jane")
            .with_permission(Permission::UserView)
            .with_role("RoleAdmin");
        assert!(has_role(&user, Permission::UserView));
        assert!(!has_role(&user, Permission::UserEdit));
        assert!(has_any_role(
            &user,
            &[Permission::UserEdit, Permission::UserView]
        ));
        assert!(!has_any_role(&user, &[]));
    }

    #[test]
    fn anonymous_user_has_nothing() {
        let user = User::default();
        assert!(!has_role(&user, Permission::Edit));
    }
}
