use serde::{Deserialize, Serialize};

/// The actor currently signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
}

/// Authentication state of the current actor.
///
/// The user is present exactly when the session is authenticated; the field
/// is private so the two can never be set inconsistently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            user: Some(SessionUser {
                username: username.into(),
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }
}
