// src/models/mod.rs

pub mod leaderboard;
pub mod post;
pub mod question;
pub mod user;
