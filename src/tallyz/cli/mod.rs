//! CLI layer: the interactive prompt loop, input grammar, and terminal
//! rendering for the binary. Not part of the library API.

pub mod app;
pub mod commands;
pub mod render;
pub mod styles;
