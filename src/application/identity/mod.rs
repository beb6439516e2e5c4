//! Identity module: registration & login
//!
//! Contains the `AccountService`, which validates submissions and
//! translates store results into account outcomes.

pub mod service;

pub use service::{AccountService, SharedAccountService};
