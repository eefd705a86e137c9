pub mod controller;
pub mod events;
pub mod notifier;
pub mod state;
