//! pixeltext CLI library.
//!
//! This crate provides the core functionality for the pixeltext CLI,
//! including input loading, logging setup and the render command.

pub mod commands;
pub mod input;
pub mod logging;
