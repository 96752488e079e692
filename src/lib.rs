pub mod analysis;
pub mod cli;
pub mod commands;
pub mod dashboard;
pub mod fs;
pub mod import;
pub mod models;
pub mod search;
pub mod validation;
