//! Core types and utilities for copy-sqlc-params.
//!
//! This crate provides the error type, config file handling and the file
//! primitives (line scanning, atomic output writes) shared by the extraction
//! engine and the command-line front end.

mod config;
mod error;
mod file;
mod scanner;

pub use config::{Config, FormatterKind};
pub use error::{Error, Result};
pub use file::OutputFile;
pub use scanner::SourceFile;
