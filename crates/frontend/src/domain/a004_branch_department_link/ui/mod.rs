pub mod link_modal;
pub mod list;
