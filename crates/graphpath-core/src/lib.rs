//! graphpath core library
//!
//! Loads a directed graph from a CSV edge list and finds paths between
//! nodes with breadth-first and depth-first search.

pub mod config;
pub mod error;
pub mod graph;
pub mod load;
pub mod logging;
