// src/generators/mod.rs
mod password;

pub use password::{build_pool, PasswordGenerator};
