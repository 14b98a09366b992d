use anchor_lang::prelude::*;

use crate::utils::ticket::TICKET_NUMBER_LEN;

/// Tier cache value meaning "draw not settled / result not attached yet".
/// Settled values are `Tier::as_u8()` (1..=4).
pub const TIER_UNSETTLED: u8 = 0;

/// One purchased ticket. Immutable after purchase except for the settlement
/// result cache (`tier`, `winnings_lamports`) and the claim flag; the cache
/// must always agree with a fresh classification against the draw's winning
/// number, which claim processing re-checks.
#[account]
pub struct SoldTicket {
    /// Draw this ticket belongs to. Tickets never move between draws.
    pub draw: Pubkey,

    /// Buyer wallet.
    pub owner: Pubkey,

    /// Per-(draw, owner) purchase index, also a PDA seed.
    pub index: u32,

    /// Ticket number in normalized codec form.
    pub number: [u8; TICKET_NUMBER_LEN],

    /// Purchase price in lamports.
    pub price_lamports: u64,

    /// Currency tag copied from the draw.
    pub currency: [u8; 8],

    pub purchased_at: i64,
    pub purchased_slot: u64,

    // ─────────────────────────────
    // Settlement result cache
    // ─────────────────────────────
    /// TIER_UNSETTLED until a result is attached.
    pub tier: u8,

    /// Payout owed to this ticket (0 for non-winners).
    pub winnings_lamports: u64,

    /// 1 once the prize (or, for cancelled draws, the refund) was paid.
    pub has_claimed: u8,

    /// Timestamp of the payout/refund (0 if unclaimed).
    pub claimed_at_ts: i64,

    /// PDA bump.
    pub bump: u8,

    /// Versioning for future migrations.
    pub version: u8,

    /// Reserved for future use.
    pub _reserved: [u8; 16],
}

impl SoldTicket {
    pub const SEED_PREFIX: &'static [u8] = b"sold_ticket";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        32 + // draw
            32 + // owner
            4  + // index
            TICKET_NUMBER_LEN + // number
            8  + // price_lamports
            8  + // currency
            8  + // purchased_at
            8  + // purchased_slot
            1  + // tier
            8  + // winnings_lamports
            1  + // has_claimed
            8  + // claimed_at_ts
            1  + // bump
            1  + // version
            16;  // reserved

    pub fn is_settled(&self) -> bool {
        self.tier != TIER_UNSETTLED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NATIVE_CURRENCY;
    use anchor_lang::AnchorSerialize;

    #[test]
    fn sold_ticket_size_matches_serialization() {
        let ticket = SoldTicket {
            draw: Pubkey::default(),
            owner: Pubkey::default(),
            index: 0,
            number: *b"15G 12902",
            price_lamports: 0,
            currency: NATIVE_CURRENCY,
            purchased_at: 0,
            purchased_slot: 0,
            tier: TIER_UNSETTLED,
            winnings_lamports: 0,
            has_claimed: 0,
            claimed_at_ts: 0,
            bump: 0,
            version: 0,
            _reserved: [0u8; 16],
        };

        let bytes = ticket.try_to_vec().unwrap();
        assert_eq!(bytes.len(), SoldTicket::SIZE);
    }
}
