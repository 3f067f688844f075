//! Authentication against the demo backend.
//!
//! Login never fails: when the backend rejects the credentials or cannot be
//! reached, a local demo session is created instead. Registration does report
//! failure.

use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::models::{AuthSession, Credentials, Registration, User};

const TOKEN_EXPIRY_MINS: u32 = 60;
const DEMO_TOKEN_PREFIX: &str = "demo_token_";
const REGISTERED_TOKEN_PREFIX: &str = "registered_token_";

/// Errors surfaced by the auth adapter.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Registration failed. Please try again.")]
    RegistrationFailed(#[source] reqwest::Error),
}

/// User as returned by the backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteUser {
    id: u64,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    #[serde(default, alias = "accessToken")]
    token: Option<String>,
}

impl RemoteUser {
    fn into_user(self) -> User {
        User {
            id: self.id.to_string(),
            name: format!("{} {}", self.first_name, self.last_name),
            username: self.username,
            email: self.email,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatedUser {
    id: u64,
}

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Logs in with the email's local part as the username.
    ///
    /// Any failure, including rejected credentials, yields a demo session.
    pub async fn login(&self, credentials: &Credentials) -> AuthSession {
        match self.remote_login(credentials).await {
            Ok(session) => session,
            Err(e) => {
                tracing::info!("Remote login failed, using demo mode: {}", e);
                demo_session(credentials)
            }
        }
    }

    pub async fn register(&self, registration: &Registration) -> Result<AuthSession, AuthError> {
        let (first_name, last_name) = registration.name_parts();

        let created: CreatedUser = self
            .http
            .post(format!("{}/users/add", self.base_url))
            .json(&json!({
                "firstName": first_name,
                "lastName": last_name,
                "username": registration.username,
                "email": registration.email,
                "password": registration.password,
            }))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(AuthError::RegistrationFailed)?
            .json()
            .await
            .map_err(AuthError::RegistrationFailed)?;

        Ok(AuthSession {
            user: User {
                id: created.id.to_string(),
                name: registration.name.clone(),
                username: registration.username.clone(),
                email: registration.email.clone(),
            },
            token: format!("{}{}", REGISTERED_TOKEN_PREFIX, Utc::now().timestamp_millis()),
        })
    }

    /// Locally issued tokens are always valid; others are checked remotely.
    pub async fn validate_token(&self, token: &str) -> bool {
        if token.starts_with(DEMO_TOKEN_PREFIX) || token.starts_with(REGISTERED_TOKEN_PREFIX) {
            return true;
        }
        self.fetch_me(token).await.is_ok()
    }

    pub async fn current_user(&self, token: &str) -> Option<User> {
        match self.fetch_me(token).await {
            Ok(remote) => Some(remote.into_user()),
            Err(e) => {
                tracing::debug!("Failed to fetch current user: {}", e);
                None
            }
        }
    }

    async fn remote_login(&self, credentials: &Credentials) -> Result<AuthSession, String> {
        let remote: RemoteUser = self
            .http
            .post(format!("{}/auth/login", self.base_url))
            .json(&json!({
                "username": credentials.email_local_part(),
                "password": credentials.password,
                "expiresInMins": TOKEN_EXPIRY_MINS,
            }))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| e.to_string())?
            .json()
            .await
            .map_err(|e| e.to_string())?;

        let token = remote
            .token
            .clone()
            .ok_or_else(|| "response did not include a token".to_string())?;

        Ok(AuthSession {
            user: remote.into_user(),
            token,
        })
    }

    async fn fetch_me(&self, token: &str) -> Result<RemoteUser, reqwest::Error> {
        self.http
            .get(format!("{}/auth/me", self.base_url))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

/// A session fabricated from the login form when the backend is unavailable.
fn demo_session(credentials: &Credentials) -> AuthSession {
    let millis = Utc::now().timestamp_millis();
    let local = credentials.email_local_part();

    let mut chars = local.chars();
    let display_name = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    AuthSession {
        user: User {
            id: format!("demo_{}", millis),
            name: display_name,
            username: local.to_string(),
            email: credentials.email.clone(),
        },
        token: format!("{}{}", DEMO_TOKEN_PREFIX, millis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::{http_client, DEFAULT_TIMEOUT};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> AuthClient {
        AuthClient::new(http_client(DEFAULT_TIMEOUT), server.uri())
    }

    fn emily_json() -> serde_json::Value {
        json!({
            "id": 1,
            "username": "emilys",
            "email": "emily.johnson@x.dummyjson.com",
            "firstName": "Emily",
            "lastName": "Johnson",
            "gender": "female",
            "image": "https://dummyjson.com/icon/emilys/128",
            "accessToken": "remote-token"
        })
    }

    #[test]
    fn test_demo_session_shape() {
        let session = demo_session(&Credentials::new("jane@example.com", "secret1"));

        assert!(session.user.id.starts_with("demo_"));
        assert_eq!(session.user.name, "Jane");
        assert_eq!(session.user.username, "jane");
        assert_eq!(session.user.email, "jane@example.com");
        assert!(session.token.starts_with("demo_token_"));
    }

    #[tokio::test]
    async fn test_login_success_maps_remote_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_partial_json(json!({
                "username": "emilys",
                "password": "emilyspass",
                "expiresInMins": 60
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(emily_json()))
            .expect(1)
            .mount(&server)
            .await;

        let session = client(&server)
            .login(&Credentials::new("emilys@example.com", "emilyspass"))
            .await;

        assert_eq!(session.token, "remote-token");
        assert_eq!(session.user.id, "1");
        assert_eq!(session.user.name, "Emily Johnson");
        assert_eq!(session.user.username, "emilys");
    }

    #[tokio::test]
    async fn test_login_rejected_falls_back_to_demo() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let session = client(&server)
            .login(&Credentials::new("someone@example.com", "whatever"))
            .await;

        assert!(session.token.starts_with("demo_token_"));
        assert_eq!(session.user.username, "someone");
    }

    #[tokio::test]
    async fn test_register_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/add"))
            .and(body_partial_json(json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "username": "ada"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 209})))
            .mount(&server)
            .await;

        let registration = Registration {
            name: "Ada Lovelace".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "engine".into(),
        };
        let session = client(&server).register(&registration).await.unwrap();

        assert_eq!(session.user.id, "209");
        assert_eq!(session.user.name, "Ada Lovelace");
        assert!(session.token.starts_with("registered_token_"));
    }

    #[tokio::test]
    async fn test_register_failure_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/add"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server)
            .register(&Registration::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Registration failed. Please try again.");
    }

    #[tokio::test]
    async fn test_validate_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("Authorization", "Bearer good"))
            .respond_with(ResponseTemplate::new(200).set_body_json(emily_json()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        let client = client(&server);

        assert!(client.validate_token("demo_token_1").await);
        assert!(client.validate_token("registered_token_1").await);
        assert!(client.validate_token("good").await);
        assert!(!client.validate_token("bad").await);
    }

    #[tokio::test]
    async fn test_current_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/auth/me"))
            .and(header("Authorization", "Bearer good"))
            .respond_with(ResponseTemplate::new(200).set_body_json(emily_json()))
            .mount(&server)
            .await;

        let client = client(&server);
        assert_eq!(client.current_user("good").await.unwrap().email, "emily.johnson@x.dummyjson.com");
        assert!(client.current_user("bad").await.is_none());
    }
}
