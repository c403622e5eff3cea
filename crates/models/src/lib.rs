pub mod errors;
pub mod service;
pub mod booking;
pub mod user;
