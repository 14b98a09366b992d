pub mod config_update;
pub mod draw_cancel;
pub mod draw_close;
pub mod draw_open;
pub mod draw_settle_complete;
pub mod draw_settle_init;
pub mod draw_settle_reprocess;
pub mod initialize;
pub mod prize_claim;
pub mod profile_close;
pub mod settlement_close;
pub mod ticket_close;
pub mod ticket_purchase;
pub mod ticket_record_result;
pub mod ticket_refund;
pub mod ticket_type_update_active;

pub use config_update::*;
pub use draw_cancel::*;
pub use draw_close::*;
pub use draw_open::*;
pub use draw_settle_complete::*;
pub use draw_settle_init::*;
pub use draw_settle_reprocess::*;
pub use initialize::*;
pub use prize_claim::*;
pub use profile_close::*;
pub use settlement_close::*;
pub use ticket_close::*;
pub use ticket_purchase::*;
pub use ticket_record_result::*;
pub use ticket_refund::*;
pub use ticket_type_update_active::*;
