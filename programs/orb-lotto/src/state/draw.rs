use anchor_lang::prelude::*;

use crate::constants::RATE_BPS_DENOM;
use crate::errors::OrbLottoErrorCode;
use crate::utils::ticket::TICKET_NUMBER_LEN;

#[repr(u8)]
pub enum DrawStatus {
    Pending = 0,   // selling tickets, or sold out and waiting for the draw time
    Completed = 1, // settled, winning number fixed
    Cancelled = 2, // aborted before settlement, tickets refundable
}

/// One lottery round. Accumulates sales while Pending; status only ever
/// moves Pending → Completed or Pending → Cancelled. The winning number is
/// non-zero if and only if the draw is Completed.
#[account]
pub struct Draw {
    /// Sequential round identifier, also a PDA seed.
    pub draw_id: u64,

    /// Ticket type sold in this round (1..=5).
    pub ticket_type: u8,

    /// DrawStatus as u8.
    pub status: u8,

    /// PDA bump.
    pub bump: u8,

    /// Unix timestamp of the scheduled draw.
    pub scheduled_at: i64,

    /// Unix timestamp when the round was opened.
    pub opened_at: i64,

    /// Unix timestamp of settlement completion (0 until Completed).
    pub completed_at: i64,

    /// Unix timestamp of cancellation (0 unless Cancelled).
    pub cancelled_at: i64,

    /// Number of tickets sold into this round.
    pub tickets_sold: u32,

    /// Total lamports collected from ticket sales.
    pub gross_sales_lamports: u64,

    /// Prize pool accrued so far (a fixed share of every sale).
    pub prize_pool_lamports: u64,

    /// Currency tag copied from Config at open time.
    pub currency: [u8; 8],

    /// Winning number in normalized codec form (all zero until Completed).
    pub winning_number: [u8; TICKET_NUMBER_LEN],

    /// Treasury PDA holding lamports for payouts and refunds.
    pub treasury: Pubkey,

    /// Versioning for future migrations.
    pub version: u8,

    /// Reserved for future fields.
    pub _reserved: [u8; 24],
}

impl Draw {
    pub const SEED_PREFIX: &'static [u8] = b"draw";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8  // draw_id
            + 1  // ticket_type
            + 1  // status
            + 1  // bump
            + 8  // scheduled_at
            + 8  // opened_at
            + 8  // completed_at
            + 8  // cancelled_at
            + 4  // tickets_sold
            + 8  // gross_sales_lamports
            + 8  // prize_pool_lamports
            + 8  // currency
            + TICKET_NUMBER_LEN // winning_number
            + 32 // treasury
            + 1  // version
            + 24; // reserved

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == DrawStatus::Pending as u8
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == DrawStatus::Completed as u8
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.status == DrawStatus::Cancelled as u8
    }

    /// Records one ticket sale: bumps the counters and accrues the pool
    /// share of the price (floor division, same for every ticket of the
    /// round since all sell at one price).
    pub fn record_sale(&mut self, price_lamports: u64, prize_pool_bps: u16) -> Result<()> {
        self.tickets_sold = self
            .tickets_sold
            .checked_add(1)
            .ok_or(OrbLottoErrorCode::MathOverflow)?;

        self.gross_sales_lamports = self
            .gross_sales_lamports
            .checked_add(price_lamports)
            .ok_or(OrbLottoErrorCode::MathOverflow)?;

        let pool_share = price_lamports
            .checked_mul(prize_pool_bps as u64)
            .ok_or(OrbLottoErrorCode::MathOverflow)?
            / RATE_BPS_DENOM;

        self.prize_pool_lamports = self
            .prize_pool_lamports
            .checked_add(pool_share)
            .ok_or(OrbLottoErrorCode::MathOverflow)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NATIVE_CURRENCY;
    use anchor_lang::AnchorSerialize;

    fn empty_draw() -> Draw {
        Draw {
            draw_id: 0,
            ticket_type: 1,
            status: DrawStatus::Pending as u8,
            bump: 0,
            scheduled_at: 0,
            opened_at: 0,
            completed_at: 0,
            cancelled_at: 0,
            tickets_sold: 0,
            gross_sales_lamports: 0,
            prize_pool_lamports: 0,
            currency: NATIVE_CURRENCY,
            winning_number: [0; TICKET_NUMBER_LEN],
            treasury: Pubkey::default(),
            version: 1,
            _reserved: [0; 24],
        }
    }

    #[test]
    fn draw_size_matches_serialization() {
        let bytes = empty_draw().try_to_vec().unwrap();
        assert_eq!(bytes.len(), Draw::SIZE);
    }

    #[test]
    fn record_sale_accrues_sixty_percent_into_the_pool() {
        let mut draw = empty_draw();
        draw.record_sale(1_000, 6_000).unwrap();
        draw.record_sale(1_000, 6_000).unwrap();

        assert_eq!(draw.tickets_sold, 2);
        assert_eq!(draw.gross_sales_lamports, 2_000);
        assert_eq!(draw.prize_pool_lamports, 1_200);
    }
}
