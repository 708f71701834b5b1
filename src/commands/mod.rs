pub mod completions;
pub mod config;
pub mod doctor;
pub mod history;
pub mod open;
pub mod shared;
pub mod show;
pub mod status;
pub mod watch;
