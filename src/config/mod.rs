//! JSON configuration types for the command-line tools.

pub mod convert;
pub mod extract;
pub mod viz;
