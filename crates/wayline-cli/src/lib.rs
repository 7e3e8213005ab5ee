//! Wayline CLI - the interactive route collection terminal
//!
//! This crate holds the terminal itself: the command inventory and
//! registry, the line parser and dispatcher, the bounded command history,
//! and the interactive route builder. The `wayline` binary in `main.rs`
//! wires it to stdin/stdout and the collection file.

pub mod builder;
pub mod commands;
pub mod history;
pub mod terminal;
