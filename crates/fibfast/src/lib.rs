//! fibfast library — command dispatch for the Fibonacci lookup tool.

pub mod app;
pub mod config;
pub mod errors;
