pub mod availability;
pub mod fetch;
pub mod token;
