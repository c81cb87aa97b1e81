//! Terminal front-ends: one-shot commands and the interactive REPL.

pub mod commands;
pub mod repl;
pub mod repl_commands;
pub mod repl_complete;
