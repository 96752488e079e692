pub mod capability;
pub mod dashboard;
pub mod deps;
pub mod init;
pub mod milestone;
pub mod quickwin;
pub mod search;
