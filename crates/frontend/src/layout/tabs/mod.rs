//! Tab management: `page` wraps one open screen, `registry` maps a key to
//! its view and `tab_labels` holds the key vocabulary.

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
