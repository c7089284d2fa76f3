pub mod actions;
pub mod client;
