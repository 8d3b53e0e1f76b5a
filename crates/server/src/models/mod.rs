pub mod progress;
pub mod reputation;
pub mod resource;
