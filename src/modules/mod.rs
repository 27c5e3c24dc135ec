//! Feature modules that are independent of the web and storage layers.

pub mod import;
