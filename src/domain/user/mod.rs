//! User aggregate
//!
//! Contains the User record, the registration and login DTOs, the field
//! validation rules, and the repository interface.

pub mod model;
pub mod repository;
pub mod validation;

mod dto_create;
mod dto_login;

pub use model::User;

pub use dto_create::{NewUser, RegisterUserDto};
pub use dto_login::LoginDto;

pub use validation::{validate_registration, ValidationError};

pub use repository::UserRepositoryInterface;
