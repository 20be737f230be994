pub mod auth;
pub mod delete;
pub mod health;
pub mod list;
pub mod upload;
