/// Registration fields as submitted. Any of them may be missing.
#[derive(Debug, Clone, Default)]
pub struct RegisterUserDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Registration fields that passed validation, with the password still in
/// plain text.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub email: String,
    pub phone: String,
}
