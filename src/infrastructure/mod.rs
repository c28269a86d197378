//! Infrastructure layer - Repository implementations and services

pub mod leaderboard;
pub mod logging;
pub mod scoring;
pub mod session;
pub mod user;
