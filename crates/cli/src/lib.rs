//! `shelflife-cli`: the interactive front end.
//!
//! Owns the single [`AppContext`](context::AppContext) and drives it from a
//! line-oriented menu.

pub mod config;
pub mod context;
pub mod menu;
pub mod services;

pub use config::{AppConfig, Cli};
pub use context::AppContext;
pub use menu::{Menu, MenuError};
