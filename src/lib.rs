//! Settings panels for the CRM admin console, rendered in the terminal
//!
//! The database and group management panels are static: their buttons name
//! admin operations but nothing is attached to them unless an
//! [`admin::AdminBackend`] that does real work is supplied.

pub mod admin;
pub mod app;
pub mod config;
pub mod tabs;
pub mod theme;
pub mod ui;
