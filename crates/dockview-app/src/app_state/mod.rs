//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the docker, embedded panel content and
//! pointer input.

mod core;
mod event_handler;
mod init;
mod panels;
mod pointer;
mod polling;
mod preview;
mod shutdown;
mod types;

pub use core::DockviewApp;
