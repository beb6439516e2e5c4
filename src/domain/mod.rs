pub mod user;

pub use user::{
    LoginDto, NewUser, RegisterUserDto, User, UserRepositoryInterface, ValidationError,
};

pub use crate::shared::{DomainError, DomainResult};
