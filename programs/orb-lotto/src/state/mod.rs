pub mod config;
pub mod draw;
pub mod draw_entry;
pub mod player_profile;
pub mod settlement;
pub mod sold_ticket;
pub mod ticket_types;
pub mod treasury;

pub use config::*;
pub use draw::*;
pub use draw_entry::*;
pub use settlement::*;
pub use sold_ticket::*;
pub use ticket_types::*;
