pub mod auth_dto;
pub mod error_dto;

pub use auth_dto::{AuthResponse, LoginRequest, LogoutResponse, RefreshTokenRequest};
pub use error_dto::ErrorResponse;
