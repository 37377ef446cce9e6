//! The tools module provides helper functions for huffzip.
//!
//! The tools are:
//! - cli: Command line interface for huffzip.
//! - freq_count: Symbol frequency count over the 257-symbol alphabet.
//!
pub mod cli;
pub mod freq_count;
