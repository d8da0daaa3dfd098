pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod demo;
pub mod error;
pub mod logging;
pub mod output;
