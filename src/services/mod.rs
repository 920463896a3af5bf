pub mod availability;
pub mod deletion_guard;
pub mod rental_validator;
