pub mod app;
pub mod config;
pub mod runner;
pub mod shared;
pub mod store;
