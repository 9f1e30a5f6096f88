//! Command implementations for graphpath

pub mod config;
pub mod dispatch;
pub mod interactive;
pub mod search;
pub mod show;
