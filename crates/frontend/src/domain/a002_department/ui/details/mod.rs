//! Department forms.
//!
//! - view_model.rs: form state, validation and the save command
//! - view.rs: inline create form, edit modal and read-only view modal

mod view;
mod view_model;

pub use view::{DepartmentCreateForm, DepartmentEditModal, DepartmentViewModal};
pub use view_model::DepartmentFormViewModel;
