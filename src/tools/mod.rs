//! The tools module provides the pieces of the command line program around the codec.
//!
//! The tools are:
//! - cli: Command line interface and program options.
//! - files: Reading and writing files, overwrite confirmation, timing and ratio reporting.
//!
pub mod cli;
pub mod files;
