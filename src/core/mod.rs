pub mod access;
pub mod booking;
pub mod config;
pub mod dashboard;
pub mod directory;
pub mod log;
pub mod payments;
pub mod slots;
pub mod store;
pub mod view;
