use serde::{Deserialize, Serialize};

/// Identity record owned by the auth slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
}

/// A user together with the token issued for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Login form input.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Everything before the `@`, or the whole string if there is none.
    pub fn email_local_part(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }
}

/// Registration form input.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Registration {
    /// First and last name as sent to the auth backend. Missing parts are empty.
    pub fn name_parts(&self) -> (&str, &str) {
        let mut parts = self.name.split(' ');
        let first = parts.next().unwrap_or_default();
        let last = parts.next().unwrap_or_default();
        (first, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_local_part() {
        assert_eq!(
            Credentials::new("emilys@example.com", "x").email_local_part(),
            "emilys"
        );
        assert_eq!(Credentials::new("plain", "x").email_local_part(), "plain");
    }

    #[test]
    fn test_name_parts() {
        let reg = Registration {
            name: "Ada Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(reg.name_parts(), ("Ada", "Lovelace"));

        let single = Registration {
            name: "Cher".to_string(),
            ..Default::default()
        };
        assert_eq!(single.name_parts(), ("Cher", ""));
    }
}
