pub mod confirm_dialog;
pub mod dynamic_fields;
pub mod file_list;
pub mod filter_panel;
pub mod hierarchy_select;
pub mod page_header;
pub mod pagination_controls;
pub mod row_actions;
pub mod search_input;
pub mod user_select;
