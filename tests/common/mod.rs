//! Common test utilities for drawtext integration tests
//!
//! Builds Excalidraw-shaped documents line by line so tests control
//! exactly which source line each `"text"` key lands on.

pub mod drawing;

pub use drawing::{DrawingBuilder, Workspace};
