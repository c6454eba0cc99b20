pub mod components;
pub mod config;
pub mod format;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
pub mod record_list;
