//! Core operations.
//!
//! This module contains the business logic behind the command line,
//! separated from argument parsing and output rendering.

pub mod copy;

pub use copy::copy;
