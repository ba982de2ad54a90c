// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod controller;
pub mod model;
pub mod paths;
pub mod scheduler;
