// Authentication: token storage, auth endpoints and shared types

mod client;
mod store;
mod types;

pub use client::AuthClient;
pub use store::TokenStore;
pub use types::{
    JwtAuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest, Role, SessionUser,
};
