//! Route gating as a pure function of auth state.

use store::models::User;

/// What a navigation to a protected page should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Requirement satisfied: render the target.
    Allow,
    /// Not signed in: redirect to the login page.
    ToLogin,
    /// Signed in but not an admin on an admin-only route: redirect to the
    /// default page.
    ToDashboard,
}

/// Evaluate the gate for the current auth state. No side effects, no
/// network call — pages map the result to a `replace` navigation.
pub fn evaluate(user: Option<&User>, require_admin: bool) -> Gate {
    match user {
        None => Gate::ToLogin,
        Some(user) if require_admin && !user.is_admin => Gate::ToDashboard,
        Some(_) => Gate::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> User {
        User {
            id: 1,
            username: "pat".to_string(),
            email: "pat@example.com".to_string(),
            is_admin,
        }
    }

    #[test]
    fn signed_out_always_goes_to_login() {
        assert_eq!(evaluate(None, false), Gate::ToLogin);
        assert_eq!(evaluate(None, true), Gate::ToLogin);
    }

    #[test]
    fn non_admin_is_bounced_from_admin_routes_only() {
        let customer = user(false);
        assert_eq!(evaluate(Some(&customer), false), Gate::Allow);
        assert_eq!(evaluate(Some(&customer), true), Gate::ToDashboard);
    }

    #[test]
    fn admin_passes_everywhere() {
        let admin = user(true);
        assert_eq!(evaluate(Some(&admin), false), Gate::Allow);
        assert_eq!(evaluate(Some(&admin), true), Gate::Allow);
    }
}
