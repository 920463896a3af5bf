pub mod client;
pub mod rental;
pub mod vehicle;
