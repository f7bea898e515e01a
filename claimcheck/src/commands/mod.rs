pub mod config;
pub mod samples;
pub mod verify;
