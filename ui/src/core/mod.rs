//! Platform-agnostic building blocks: state machines, animation, formatting,
//! configuration and the thin platform layer.

pub mod animation;
pub mod config;
pub mod format;
pub mod platform;
pub mod state;
pub mod timing;
