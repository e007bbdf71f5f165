pub mod token;
pub mod user;

pub use token::TokenRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "mock"))]
pub use token::MockTokenRepository;
#[cfg(any(test, feature = "mock"))]
pub use user::MockUserRepository;
