pub mod pages;
pub mod state;
pub mod trips;
