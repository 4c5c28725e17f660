pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod scanner;
pub mod storage;
