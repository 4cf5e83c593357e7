pub mod api_error;
pub mod capabilities;
pub mod fields;
pub mod format;
pub mod hierarchy;
pub mod list_response;
pub mod load_state;
pub mod pagination;
pub mod pending_delete;
