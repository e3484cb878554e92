pub mod facility;
pub mod matches;
