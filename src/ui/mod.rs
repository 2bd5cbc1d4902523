//! Interactive terminal UI for looking up class refs and hashing strings.
//!
//! [`LookupUi`] is the public entry point. The remaining submodules hold the
//! event loop, key handling, rendering and the widgets they draw with.

mod actions;
mod builder;
mod components;
mod config;
mod input;
mod render;
mod runtime;
mod state;
pub mod theme;


pub use builder::LookupUi;
pub use config::UiLabels;
pub use state::Tab;
pub use theme::Theme;
