pub mod client_repository;
pub mod rental_repository;
pub mod vehicle_repository;
