pub mod access_jwt;
pub mod factory;
pub mod service;
pub mod validator;

pub use access_jwt::AccessTokenDecoder;
pub use factory::build_auth_service;
pub use service::{AuthError, AuthService};
pub use validator::{SystemClock, TokenValidator, ValidateError};
