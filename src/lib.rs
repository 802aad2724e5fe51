//! Weather widget - city weather lookup built on tui-dispatch
//!
//! The library exposes every module so the binary and the integration tests
//! share the same store, reducer and components.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod icons;
pub mod logging;
pub mod reducer;
pub mod state;
