use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct TicketTypeSettings {
    pub type_id: u8,
    pub active: u8,

    /// Ticket price in lamports. Every ticket of a draw sells at the price
    /// of the draw's ticket type.
    pub price_lamports: u64,

    /// Short product label shown to players ("Basic", "Jackpot", ...),
    /// zero-padded ASCII.
    pub label: [u8; 8],

    pub _reserved: [u8; 10],
}

impl TicketTypeSettings {
    pub const SIZE: usize =
        1  // type_id
            + 1  // active
            + 8  // price_lamports
            + 8  // label
            + 10; // _reserved

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active != 0
    }
}
