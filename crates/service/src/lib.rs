pub mod errors;
pub mod ownership;
pub mod booking_flow;
pub mod search;
pub mod auth;
