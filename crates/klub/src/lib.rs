//! Domain library for a mountaineering-club management service: role-based
//! capability policy, rank classification from cumulative climbing statistics,
//! age-bracket report aggregation, and the HTTP surface that exposes them.

pub mod club;
pub mod config;
pub mod error;
pub mod telemetry;
