pub mod auth;
pub mod branch_rights;
pub mod permissions;
pub mod users;
