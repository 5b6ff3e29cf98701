pub const LOGIN_PATH: &str = "/";
pub const SIGNUP_PATH: &str = "/signup";
pub const CHECK_IN_PATH: &str = "/check-form";

/// Which side of the session flag a route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Needs a logged-in session.
    Protected,
    /// Only for visitors; logged-in users are sent on to the check-in.
    GuestOnly,
}

/// Where to send the user instead, if anywhere.
pub fn redirect_for(guard: Guard, logged_in: bool) -> Option<&'static str> {
    match (guard, logged_in) {
        (Guard::Protected, false) => Some(LOGIN_PATH),
        (Guard::GuestOnly, true) => Some(CHECK_IN_PATH),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_protected_requires_login() {
        assert_eq!(redirect_for(Guard::Protected, false), Some("/"));
        assert_eq!(redirect_for(Guard::Protected, true), None);
    }

    #[test]
    fn test_guest_only_forwards_logged_in_users() {
        assert_eq!(redirect_for(Guard::GuestOnly, true), Some("/check-form"));
        assert_eq!(redirect_for(Guard::GuestOnly, false), None);
    }

    #[test]
    fn test_check_in_reachable_only_while_logged_in() {
        let store = MemoryStorage::default();
        Session::new(store.clone()).record_login("tok");

        let after_reload = Session::new(store.clone());
        assert_eq!(redirect_for(Guard::Protected, after_reload.is_logged_in()), None);

        after_reload.logout();
        let after_logout = Session::new(store);
        assert_eq!(
            redirect_for(Guard::Protected, after_logout.is_logged_in()),
            Some(LOGIN_PATH)
        );
    }
}
