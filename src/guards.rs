// Route guards
//
// Pure predicates over the current session. A denied check carries the view
// the console should fall back to: unauthenticated users go to the login
// screen, authenticated users with the wrong role land on their own
// dashboard.

use crate::auth::{Role, SessionUser};

/// Landing views a denied guard can redirect to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Home,
    AdminDashboard,
    SuperadminDashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Admit,
    Deny(Redirect),
}

impl GuardOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, GuardOutcome::Admit)
    }
}

/// Any signed-in user
pub fn authenticated(session: Option<&SessionUser>) -> GuardOutcome {
    match session {
        Some(_) => GuardOutcome::Admit,
        None => GuardOutcome::Deny(Redirect::Login),
    }
}

/// Admin or superadmin
pub fn admin(session: Option<&SessionUser>) -> GuardOutcome {
    match session {
        None => GuardOutcome::Deny(Redirect::Login),
        Some(user) if user.role.is_admin() => GuardOutcome::Admit,
        Some(_) => GuardOutcome::Deny(Redirect::Home),
    }
}

/// Superadmin only
pub fn superadmin(session: Option<&SessionUser>) -> GuardOutcome {
    match session {
        None => GuardOutcome::Deny(Redirect::Login),
        Some(user) if user.role.is_superadmin() => GuardOutcome::Admit,
        Some(user) if user.role.is_admin() => GuardOutcome::Deny(Redirect::AdminDashboard),
        Some(_) => GuardOutcome::Deny(Redirect::Home),
    }
}

/// Generic role requirement. Admin requirements are satisfied by superadmins;
/// on denial the redirect follows the caller's own role.
pub fn require_role(session: Option<&SessionUser>, required: Role) -> GuardOutcome {
    let Some(user) = session else {
        return GuardOutcome::Deny(Redirect::Login);
    };

    let admitted = match required {
        Role::Superadmin => user.role.is_superadmin(),
        Role::Admin => user.role.is_admin(),
        Role::Student => user.role.is_student(),
    };
    if admitted {
        return GuardOutcome::Admit;
    }

    let redirect = if user.role.is_superadmin() {
        Redirect::SuperadminDashboard
    } else if user.role.is_admin() {
        Redirect::AdminDashboard
    } else {
        Redirect::Home
    };
    GuardOutcome::Deny(redirect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            id: 1,
            username: "u".into(),
            role,
        }
    }

    #[test]
    fn test_authenticated_guard() {
        assert_eq!(authenticated(None), GuardOutcome::Deny(Redirect::Login));
        assert!(authenticated(Some(&user(Role::Student))).is_admitted());
    }

    #[test]
    fn test_admin_guard_admits_admin_and_superadmin() {
        assert!(admin(Some(&user(Role::Admin))).is_admitted());
        assert!(admin(Some(&user(Role::Superadmin))).is_admitted());
        assert_eq!(
            admin(Some(&user(Role::Student))),
            GuardOutcome::Deny(Redirect::Home)
        );
        assert_eq!(admin(None), GuardOutcome::Deny(Redirect::Login));
    }

    #[test]
    fn test_superadmin_guard_redirects_by_role() {
        assert!(superadmin(Some(&user(Role::Superadmin))).is_admitted());
        assert_eq!(
            superadmin(Some(&user(Role::Admin))),
            GuardOutcome::Deny(Redirect::AdminDashboard)
        );
        assert_eq!(
            superadmin(Some(&user(Role::Student))),
            GuardOutcome::Deny(Redirect::Home)
        );
        assert_eq!(superadmin(None), GuardOutcome::Deny(Redirect::Login));
    }

    #[test]
    fn test_require_role_redirect_follows_caller_role() {
        // Superadmin hitting a student-only view lands on their own dashboard
        assert_eq!(
            require_role(Some(&user(Role::Superadmin)), Role::Student),
            GuardOutcome::Deny(Redirect::SuperadminDashboard)
        );
        assert_eq!(
            require_role(Some(&user(Role::Admin)), Role::Superadmin),
            GuardOutcome::Deny(Redirect::AdminDashboard)
        );
        // Superadmin satisfies an admin requirement
        assert!(require_role(Some(&user(Role::Superadmin)), Role::Admin).is_admitted());
    }
}
