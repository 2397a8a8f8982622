//! Conditional dispatch between privileged and challenge views.

use crate::domain::Session;

/// Return `privileged` when the session is authenticated, `challenge`
/// otherwise. Holds no state of its own.
pub fn guard<V>(session: &Session, privileged: V, challenge: V) -> V {
    if session.is_authenticated() {
        privileged
    } else {
        challenge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_session_gets_the_privileged_view() {
        let session = Session::authenticated("adminanamol");
        assert_eq!(guard(&session, "admin-panel", "login-form"), "admin-panel");
    }

    #[test]
    fn test_anonymous_session_gets_the_challenge() {
        let session = Session::anonymous();
        assert_eq!(guard(&session, "admin-panel", "login-form"), "login-form");
    }
}
