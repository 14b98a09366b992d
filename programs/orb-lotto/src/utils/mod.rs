pub mod allocate;
pub mod resolve;
pub mod sales;
pub mod ticket;
pub mod transfers;

pub use allocate::*;
pub use resolve::*;
pub use ticket::*;
