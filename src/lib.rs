//! Perfect maze generation, BFS/DFS solving and a player model shared by keyboard play and
//! animated solution playback, with a small terminal front end.

pub mod animator;
pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod generators;
pub mod logger;
pub mod maze;
pub mod session;
pub mod solvers;
