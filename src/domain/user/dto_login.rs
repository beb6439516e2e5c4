#[derive(Debug, Clone, Default)]
pub struct LoginDto {
    pub username: Option<String>,
    pub password: Option<String>,
}
