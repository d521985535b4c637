// Common utilities shared between macros
//
// This module contains:
// - parse_utils: attribute argument parsing and type inspection

mod parse_utils;

pub use parse_utils::*;
