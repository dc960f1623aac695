//! Adapters Layer - External implementations of the ports
//!
//! - `brk`: Bitcoin Research Kit HTTP metric source
//! - `cli`: clap command-line surface

pub mod brk;
pub mod cli;
