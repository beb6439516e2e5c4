//! Registration field rules.
//!
//! Fields are checked in a fixed order and the first failure is reported:
//! first name, last name, email, phone, then username and password together.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::{NewUser, RegisterUserDto};

static FIRST_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("first name pattern"));

static LAST_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+(['-][a-zA-Z]+)*$").expect("last name pattern"));

// `\w` spelled out as ASCII so non-Latin letters are rejected.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)[A-Za-z0-9_]{2,6}$").expect("email pattern")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("First name must contain only letters")]
    FirstNameFormat,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Last name must contain only letters, hyphens, or apostrophes")]
    LastNameFormat,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailFormat,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Phone number must be exactly 10 digits")]
    PhoneFormat,
    #[error("Username and password are required")]
    CredentialsRequired,
}

/// Returns the value when it is present and non-empty.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn check(
    value: Option<String>,
    pattern: &Regex,
    missing: ValidationError,
    malformed: ValidationError,
) -> Result<String, ValidationError> {
    let value = required(value).ok_or(missing)?;
    if pattern.is_match(&value) {
        Ok(value)
    } else {
        Err(malformed)
    }
}

/// Validate a registration submission.
pub fn validate_registration(dto: RegisterUserDto) -> Result<NewUser, ValidationError> {
    let RegisterUserDto {
        first_name,
        last_name,
        username,
        password,
        email,
        phone,
    } = dto;

    let first_name = check(
        first_name,
        &FIRST_NAME_RE,
        ValidationError::FirstNameRequired,
        ValidationError::FirstNameFormat,
    )?;
    let last_name = check(
        last_name,
        &LAST_NAME_RE,
        ValidationError::LastNameRequired,
        ValidationError::LastNameFormat,
    )?;
    let email = check(
        email,
        &EMAIL_RE,
        ValidationError::EmailRequired,
        ValidationError::EmailFormat,
    )?;
    let phone = check(
        phone,
        &PHONE_RE,
        ValidationError::PhoneRequired,
        ValidationError::PhoneFormat,
    )?;
    let (Some(username), Some(password)) = (required(username), required(password)) else {
        return Err(ValidationError::CredentialsRequired);
    };

    Ok(NewUser {
        first_name,
        last_name,
        username,
        password,
        email,
        phone,
    })
}
