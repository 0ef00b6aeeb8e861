pub mod attendance;
pub mod cache;
pub mod extract;
pub mod health;
pub mod members;
pub mod pages;
