use anchor_lang::prelude::*;
use crate::errors::OrbLottoErrorCode;
use crate::state::*;

/// ---------------------------------------------------------------------------
/// ReopenDrawSettlement
///
/// Called by the settlement worker **before** re-running the heavy work
/// (ticket scan, allocation, payout bookkeeping) after a failed attempt.
///
/// Responsibilities:
///   - Ensure the Settlement PDA already exists for the draw
///   - Ensure it has not been finalized (i.e. not Settled)
///   - Flip state -> Processing, increment attempt_count, update timestamps
///
/// After this:
///   - Worker can safely recompute off-chain
///   - Then call `complete_draw_settlement` to finalize + write results.
/// ---------------------------------------------------------------------------
#[derive(Accounts)]
#[instruction(draw_id: u64)]
pub struct ReopenDrawSettlement<'info> {
    /// Global config (authority, rates, etc.)
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ OrbLottoErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [Draw::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Account<'info, Draw>,

    /// Settlement PDA for this draw – must already exist
    #[account(
        mut,
        seeds = [Settlement::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = settlement.bump
    )]
    pub settlement: Account<'info, Settlement>,

    /// Authority allowed to drive settlement for this program
    #[account(address = config.authority @ OrbLottoErrorCode::Unauthorized)]
    pub authority: Signer<'info>,
}


pub fn reopen_draw_settlement_handler(
    ctx: Context<ReopenDrawSettlement>,
    draw_id: u64,
) -> Result<()> {
    let draw = &ctx.accounts.draw;
    let settlement = &mut ctx.accounts.settlement;

    let clock = Clock::get()?;

    // ─────────────────────────────
    // 1) Validate draw + status sanity
    // ─────────────────────────────

    // Belt & suspenders: stored ids must match the PDA argument
    require_eq!(settlement.draw_id, draw_id, OrbLottoErrorCode::DrawMismatch);
    require_eq!(draw.draw_id, draw_id, OrbLottoErrorCode::DrawMismatch);

    // A settled draw is immutable; only failed/processing attempts retry.
    require!(!settlement.is_settled(), OrbLottoErrorCode::DrawAlreadySettled);
    require!(draw.is_pending(), OrbLottoErrorCode::DrawNotPending);

    // ─────────────────────────────
    // 2) Flip state → Processing and bump attempt
    // ─────────────────────────────

    settlement.attempt_count = settlement.attempt_count.saturating_add(1);
    // Must set to Processing just in case it was previously Failed
    settlement.status = SettlementStatus::Processing as u8;
    settlement.last_updated_slot = clock.slot;
    settlement.last_updated_ts = clock.unix_timestamp;

    Ok(())
}
