// lib.rs

pub mod arithmetic;
pub mod command;
pub mod completion;
pub mod config;
pub mod history;
pub mod logging;
pub mod parser;
pub mod repl;
pub mod table;
pub mod util;
