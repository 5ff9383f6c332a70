pub mod events;
pub mod input;
pub mod state;
pub mod store;
