//! Terminal side of the binary: printing and the interactive menu.

pub mod print;
pub mod shell;
