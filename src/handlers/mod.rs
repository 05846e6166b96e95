// src/handlers/mod.rs

pub mod account;
pub mod auth;
pub mod leaderboard;
pub mod posts;
pub mod quiz;
