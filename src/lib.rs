pub mod aggregate;
pub mod amount;
pub mod api;
pub mod commands;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod ui;
pub mod workflow;
