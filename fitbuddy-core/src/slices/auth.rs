use crate::models::{AuthSession, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    /// Replaces any existing session; there is no merge.
    LoginSuccess(AuthSession),
    Logout,
    /// Replaces the user record; token and auth flag are untouched.
    UpdateUser(User),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl AuthState {
    pub fn reduce(mut self, action: AuthAction) -> Self {
        match action {
            AuthAction::LoginSuccess(session) => {
                self.user = Some(session.user);
                self.token = Some(session.token);
                self.is_authenticated = true;
            }
            AuthAction::Logout => {
                self.user = None;
                self.token = None;
                self.is_authenticated = false;
            }
            AuthAction::UpdateUser(user) => {
                self.user = Some(user);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            username: "emilys".to_string(),
            email: "emily@example.com".to_string(),
            name: "Emily Johnson".to_string(),
        }
    }

    fn session(id: &str, token: &str) -> AuthSession {
        AuthSession {
            user: user(id),
            token: token.to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_anonymous() {
        let state = AuthState::default();
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert!(state.token.is_none());
    }

    #[test]
    fn test_login_then_logout() {
        let state = AuthState::default().reduce(AuthAction::LoginSuccess(session("u1", "tok")));
        assert!(state.is_authenticated);
        assert_eq!(state.user.as_ref().unwrap().id, "u1");
        assert_eq!(state.token.as_deref(), Some("tok"));

        let state = state.reduce(AuthAction::Logout);
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert!(state.token.is_none());
    }

    #[test]
    fn test_login_is_last_write_wins() {
        let state = AuthState::default()
            .reduce(AuthAction::LoginSuccess(session("u1", "first")))
            .reduce(AuthAction::LoginSuccess(session("u2", "second")));

        assert_eq!(state.user.unwrap().id, "u2");
        assert_eq!(state.token.as_deref(), Some("second"));
    }

    #[test]
    fn test_update_user_keeps_token() {
        let mut renamed = user("u1");
        renamed.name = "Emily J.".to_string();

        let state = AuthState::default()
            .reduce(AuthAction::LoginSuccess(session("u1", "tok")))
            .reduce(AuthAction::UpdateUser(renamed));

        assert_eq!(state.user.unwrap().name, "Emily J.");
        assert_eq!(state.token.as_deref(), Some("tok"));
        assert!(state.is_authenticated);
    }
}
