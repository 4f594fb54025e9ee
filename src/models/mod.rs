pub mod appointment;
pub mod customer;
pub mod payment;
pub mod role;
pub mod service;
pub mod staff;
pub mod status_category;
