pub mod progress;
pub mod runner;
