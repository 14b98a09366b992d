use anchor_lang::prelude::*;

/// Per-(draw, player) purchase counter. Supplies the index for the next
/// SoldTicket PDA and enforces the per-draw ticket cap.
#[account]
pub struct DrawEntry {
    pub draw: Pubkey,
    pub player: Pubkey,

    /// Tickets this player bought into the draw so far.
    pub tickets_bought: u32,

    /// Lamports this player spent on the draw so far.
    pub lamports_spent: u64,

    /// PDA bump.
    pub bump: u8,

    /// Reserved for future use.
    pub _reserved: [u8; 8],
}

impl DrawEntry {
    pub const SEED_PREFIX: &'static [u8] = b"draw_entry";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32 + // draw
            32 + // player
            4  + // tickets_bought
            8  + // lamports_spent
            1  + // bump
            8;   // reserved
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    #[test]
    fn draw_entry_size_matches_serialization() {
        let entry = DrawEntry {
            draw: Pubkey::default(),
            player: Pubkey::default(),
            tickets_bought: 0,
            lamports_spent: 0,
            bump: 0,
            _reserved: [0u8; 8],
        };

        let bytes = entry.try_to_vec().unwrap();
        assert_eq!(bytes.len(), DrawEntry::SIZE);
    }
}
