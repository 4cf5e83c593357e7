pub mod auth;
pub mod branch_rights;
pub mod pages;
pub mod password_change;
pub mod user_rights;
pub mod users;
