pub mod analyze;
pub mod health;
pub mod login;
pub mod report;
pub mod strategies;
