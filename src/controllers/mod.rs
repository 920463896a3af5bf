pub mod client_controller;
pub mod rental_controller;
pub mod vehicle_controller;
