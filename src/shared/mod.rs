mod components;
pub mod constants;
mod messages;
mod resources;
mod structs;

pub use components::*;
pub use messages::*;
pub use resources::*;
pub use structs::*;
