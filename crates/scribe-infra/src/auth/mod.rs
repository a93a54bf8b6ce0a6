//! Authentication implementations.

mod jwt;
mod password;

pub use jwt::{JwtTokenService, SessionConfig};
pub use password::Argon2PasswordService;
