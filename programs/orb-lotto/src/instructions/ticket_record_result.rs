use anchor_lang::prelude::*;

use crate::errors::OrbLottoErrorCode;
use crate::state::*;
use crate::utils::resolve::classify_ticket;
use crate::utils::ticket::TicketNumber;

/// Attaches the settlement result (tier, winnings) to a sold ticket.
///
/// Permissionless crank: the result is recomputed from the stored winning
/// number, so there is nothing a caller could forge. This is how losing
/// tickets get their `NoMatch` recorded — winners usually get theirs written
/// by `claim_prize` instead, and both paths produce identical values.
#[derive(Accounts)]
#[instruction(draw_id: u64)]
pub struct RecordTicketResult<'info> {
    #[account(
        seeds = [Draw::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Account<'info, Draw>,

    #[account(
        seeds = [Settlement::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = settlement.bump,
        constraint = settlement.draw_id == draw.draw_id @ OrbLottoErrorCode::DrawMismatch,
    )]
    pub settlement: Account<'info, Settlement>,

    #[account(
        mut,
        constraint = ticket.draw == draw.key() @ OrbLottoErrorCode::DrawMismatch,
    )]
    pub ticket: Account<'info, SoldTicket>,

    pub cranker: Signer<'info>,
}

pub fn record_ticket_result_handler(
    ctx: Context<RecordTicketResult>,
    _draw_id: u64,
) -> Result<()> {
    let draw = &ctx.accounts.draw;
    let settlement = &ctx.accounts.settlement;
    let ticket = &mut ctx.accounts.ticket;

    require!(draw.is_completed(), OrbLottoErrorCode::DrawNotCompleted);
    require!(settlement.is_settled(), OrbLottoErrorCode::ClaimNotAllowed);
    require!(!ticket.is_settled(), OrbLottoErrorCode::AlreadyRecorded);

    let winning = TicketNumber::from_bytes(&settlement.winning_number)
        .map_err(|_| error!(OrbLottoErrorCode::InvalidWinningNumber))?;
    let number = TicketNumber::from_bytes(&ticket.number)?;
    let tier = classify_ticket(&winning, &number);

    ticket.tier = tier.as_u8();
    ticket.winnings_lamports = settlement.payout_for_tier(tier);

    Ok(())
}
