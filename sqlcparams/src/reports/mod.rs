//! Report data structures for commands.
//!
//! This module separates data collection from rendering.
//! Operations build reports, then render them to an Output target.

mod copy;
mod output;

pub use copy::{CopyReport, CopyResult};
pub use output::{Report, TerminalOutput};
