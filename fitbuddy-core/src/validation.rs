//! Client-side form checks.
//!
//! Failures are reported per field and never reach a slice.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Credentials, Exercise, Registration, WorkoutLog};

const MIN_PASSWORD_LEN: usize = 6;
const MIN_NAME_LEN: usize = 2;
const MIN_USERNAME_LEN: usize = 3;

/// Field name to message, for every field that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        // Keep the first message for a field
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

pub fn validate_login(credentials: &Credentials) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &credentials.email);
    check_password(&mut errors, &credentials.password);
    errors.into_result()
}

pub fn validate_registration(
    registration: &Registration,
    confirm_password: &str,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = registration.name.trim();
    if name.is_empty() {
        errors.add("name", "Name is required");
    } else if name.chars().count() < MIN_NAME_LEN {
        errors.add(
            "name",
            format!("Name must be at least {} characters", MIN_NAME_LEN),
        );
    }

    let username = registration.username.trim();
    if username.is_empty() {
        errors.add("username", "Username is required");
    } else if username.chars().count() < MIN_USERNAME_LEN {
        errors.add(
            "username",
            format!("Username must be at least {} characters", MIN_USERNAME_LEN),
        );
    } else if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        errors.add(
            "username",
            "Username can only contain letters, numbers and underscores",
        );
    }

    check_email(&mut errors, &registration.email);
    check_password(&mut errors, &registration.password);

    if confirm_password.is_empty() {
        errors.add("confirm_password", "Please confirm your password");
    } else if confirm_password != registration.password {
        errors.add("confirm_password", "Passwords must match");
    }

    errors.into_result()
}

/// Raw text from the "log exercise" form.
#[derive(Debug, Clone, Default)]
pub struct WorkoutForm {
    pub sets: String,
    pub reps: String,
    pub weight: Option<String>,
    pub duration: Option<String>,
    pub notes: Option<String>,
}

impl WorkoutForm {
    /// Builds a log entry for `exercise`.
    ///
    /// Sets and reps must be present; unparseable numbers count as zero.
    /// Blank optional fields are left unset.
    pub fn into_workout(self, exercise: &Exercise) -> Result<WorkoutLog, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.sets.trim().is_empty() {
            errors.add("sets", "Sets are required");
        }
        if self.reps.trim().is_empty() {
            errors.add("reps", "Reps are required");
        }
        errors.into_result()?;

        let mut log = WorkoutLog::from_exercise(
            exercise,
            lenient_int(&self.sets),
            lenient_int(&self.reps),
        );

        if let Some(weight) = non_blank(self.weight.as_deref()) {
            log = log.with_weight(weight.parse().unwrap_or(0.0));
        }
        if let Some(duration) = non_blank(self.duration.as_deref()) {
            log = log.with_duration(lenient_int(duration));
        }
        if let Some(notes) = non_blank(self.notes.as_deref()) {
            log = log.with_notes(notes);
        }

        Ok(log)
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    let email = email.trim();
    if email.is_empty() {
        errors.add("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.add("email", "Invalid email address");
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.is_empty() {
        errors.add("password", "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        );
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|part| !part.is_empty())
}

/// Leading digits as an integer, zero if there are none.
fn lenient_int(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
