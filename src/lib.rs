pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fields;
pub mod selector;
pub mod session;
// cmd and reports belong to the binary (main.rs).
