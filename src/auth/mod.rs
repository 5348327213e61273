//! Authentication: register, login, current user, JWT.

mod handlers;
mod jwt;
mod service;

pub use handlers::{current_user, login, register};
pub use jwt::{Claims, JwtSecret};
pub use service::PasswordService;
