//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod distribution;
pub mod footer;
pub mod header;
pub mod kpis;
pub mod logs;
pub mod tables;
