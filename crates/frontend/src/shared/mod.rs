pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod files;
pub mod http;
pub mod icons;
pub mod modal;
pub mod notification;
pub mod paged_list;
