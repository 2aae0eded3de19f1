//! Library components of the `tread` command.

pub mod config;
pub mod logging;
pub mod pipeline;
