use anchor_lang::prelude::*;
use crate::errors::OrbLottoErrorCode;
use crate::state::*;
use crate::state::treasury::Treasury;
use crate::utils::allocate::allocate_prizes;
use crate::utils::resolve::{resolve_draw_against, TierCounts};
use crate::utils::ticket::TicketNumber;

/// Cannot settle the same draw twice:
// the Settlement PDA is created once via BeginDrawSettlement,
// and this instruction requires status == Processing and then sets it to Settled.
#[derive(Accounts)]
#[instruction(draw_id: u64)]
pub struct CompleteDrawSettlement<'info> {
    /// Global config (for authority + rates etc.)
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ OrbLottoErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Draw::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = draw.bump,
        constraint = draw.draw_id == draw_id @ OrbLottoErrorCode::DrawMismatch,
    )]
    pub draw: Account<'info, Draw>,

    /// Settlement PDA for this draw – MUST already exist
    #[account(
        mut,
        seeds = [Settlement::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = settlement.bump,
        constraint = settlement.draw_id == draw_id @ OrbLottoErrorCode::DrawMismatch,
    )]
    pub settlement: Account<'info, Settlement>,

    /// Treasury holding the lamports for all draws
    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        constraint = treasury.key() == draw.treasury @ OrbLottoErrorCode::TreasuryMismatch
    )]
    pub treasury: Account<'info, Treasury>,

    /// Foundation vault receiving the community share
    #[account(
        mut,
        address = config.foundation_vault @ OrbLottoErrorCode::InvalidVaultTarget
    )]
    pub foundation_vault: SystemAccount<'info>,

    /// Operations vault receiving the residual
    #[account(
        mut,
        address = config.operations_vault @ OrbLottoErrorCode::InvalidVaultTarget
    )]
    pub operations_vault: SystemAccount<'info>,

    /// Authority account that is allowed to settle draws
    #[account(mut, address = config.authority @ OrbLottoErrorCode::Unauthorized)]
    pub authority: Signer<'info>,
    // No system_program needed – lamports move by direct balance edits.
}


/// ---------------------------------------------------------------------------
/// complete_draw_settlement_handler
///
/// Called once per draw after the worker has classified every ticket against
/// the winning number fixed in `begin_draw_settlement`.
///
/// RULES:
///   - Tier counts and the foundation/operations amounts are proposed by the
///     worker but NOT trusted: the allocator is re-run on-chain and any
///     mismatch rejects the call.
///   - If the full ticket set is supplied as remaining accounts, the tier
///     classification itself is also re-run on-chain and the proposed counts
///     must match it exactly.
///   - Foundation and operations lamports leave the treasury here; the prize
///     outlay stays behind for per-ticket claims.
/// ---------------------------------------------------------------------------
pub fn complete_draw_settlement_handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, CompleteDrawSettlement<'info>>,
    _draw_id: u64,

    // Proposed by the worker, but NOT trusted — we recompute on-chain.
    tier1_winners: u32,
    tier2_winners: u32,
    tier3_winners: u32,
    foundation_lamports: u64,
    operations_lamports: u64,
) -> Result<()> {
    // Shorthand for accounts
    let config = &ctx.accounts.config;
    let draw = &mut ctx.accounts.draw;
    let settlement = &mut ctx.accounts.settlement;
    let treasury = &mut ctx.accounts.treasury;

    let clock = Clock::get()?;
    let settled_ts = clock.unix_timestamp;

    // -----------------------------------------------------------------------
    // 1) Validate status and proposed counts
    // -----------------------------------------------------------------------
    require!(draw.is_pending(), OrbLottoErrorCode::DrawNotPending);
    require!(
        settlement.status == SettlementStatus::Processing as u8,
        OrbLottoErrorCode::SettlementNotInProcessingState
    );

    let winners = tier1_winners as u64 + tier2_winners as u64 + tier3_winners as u64;
    require!(
        winners <= draw.tickets_sold as u64,
        OrbLottoErrorCode::TooManyWinners
    );

    let no_match = draw.tickets_sold - tier1_winners - tier2_winners - tier3_winners;
    let counts = TierCounts {
        tier1: tier1_winners,
        tier2: tier2_winners,
        tier3: tier3_winners,
        no_match,
    };

    // -----------------------------------------------------------------------
    // 2) If the ticket set was supplied, re-run the resolution on-chain
    // -----------------------------------------------------------------------
    if !ctx.remaining_accounts.is_empty() {
        require!(
            ctx.remaining_accounts.len() == draw.tickets_sold as usize,
            OrbLottoErrorCode::IncompleteTicketSet
        );

        let winning = TicketNumber::from_bytes(&settlement.winning_number)
            .map_err(|_| error!(OrbLottoErrorCode::InvalidWinningNumber))?;

        let mut tickets: Vec<(Pubkey, TicketNumber)> =
            Vec::with_capacity(ctx.remaining_accounts.len());
        for info in ctx.remaining_accounts.iter() {
            let ticket: Account<SoldTicket> = Account::try_from(info)?;
            require!(
                ticket.draw == draw.key(),
                OrbLottoErrorCode::DrawMismatch
            );
            tickets.push((info.key(), TicketNumber::from_bytes(&ticket.number)?));
        }

        let resolution = resolve_draw_against(&winning, &tickets)?;
        require!(
            resolution.counts == counts,
            OrbLottoErrorCode::TierCountMismatch
        );
    }

    // -----------------------------------------------------------------------
    // 3) Recompute the allocation on-chain
    // -----------------------------------------------------------------------
    let breakdown = allocate_prizes(
        draw.gross_sales_lamports,
        draw.prize_pool_lamports,
        &counts,
        &config.allocation_rates(),
    )?;

    // Worker inputs must match the canonical on-chain computation
    require_eq!(
        breakdown.foundation_lamports,
        foundation_lamports,
        OrbLottoErrorCode::InvalidPotBreakdown
    );
    require_eq!(
        breakdown.operations_lamports,
        operations_lamports,
        OrbLottoErrorCode::InvalidPotBreakdown
    );

    // -----------------------------------------------------------------------
    // 4) Move the foundation + operations shares out of the treasury
    // -----------------------------------------------------------------------
    let treasury_balance = **treasury.to_account_info().lamports.borrow();

    let obligations = breakdown
        .foundation_lamports
        .checked_add(breakdown.operations_lamports)
        .and_then(|sum| sum.checked_add(breakdown.total_outlay_lamports))
        .ok_or(OrbLottoErrorCode::MathOverflow)?;

    // After the shares leave, the treasury must still cover every claim.
    require!(
        treasury_balance >= obligations,
        OrbLottoErrorCode::InsufficientTreasuryBalance
    );

    if breakdown.foundation_lamports > 0 {
        **treasury.to_account_info().try_borrow_mut_lamports()? -=
            breakdown.foundation_lamports;
        **ctx.accounts.foundation_vault.to_account_info().try_borrow_mut_lamports()? +=
            breakdown.foundation_lamports;

        treasury.total_foundation_withdrawn = treasury
            .total_foundation_withdrawn
            .checked_add(breakdown.foundation_lamports)
            .ok_or(OrbLottoErrorCode::MathOverflow)?;
    }

    if breakdown.operations_lamports > 0 {
        **treasury.to_account_info().try_borrow_mut_lamports()? -=
            breakdown.operations_lamports;
        **ctx.accounts.operations_vault.to_account_info().try_borrow_mut_lamports()? +=
            breakdown.operations_lamports;

        treasury.total_operations_withdrawn = treasury
            .total_operations_withdrawn
            .checked_add(breakdown.operations_lamports)
            .ok_or(OrbLottoErrorCode::MathOverflow)?;
    }

    // -----------------------------------------------------------------------
    // 5) Populate the Settlement snapshot (final state)
    // -----------------------------------------------------------------------
    settlement.tickets_considered = draw.tickets_sold;
    settlement.tier1_winners = tier1_winners;
    settlement.tier2_winners = tier2_winners;
    settlement.tier3_winners = tier3_winners;

    settlement.tier1_payout_lamports = breakdown.tier1_payout_lamports;
    settlement.tier2_payout_each_lamports = breakdown.tier2_payout_each_lamports;
    settlement.tier3_payout_each_lamports = breakdown.tier3_payout_each_lamports;
    settlement.total_outlay_lamports = breakdown.total_outlay_lamports;
    settlement.foundation_lamports = breakdown.foundation_lamports;
    settlement.operations_lamports = breakdown.operations_lamports;

    settlement.claimed_winners = 0;
    settlement.claimed_lamports = 0;
    settlement.settled_at = settled_ts;

    // Update processing metadata / state machine fields
    settlement.status = SettlementStatus::Settled as u8;
    settlement.last_updated_slot = clock.slot;
    settlement.last_updated_ts = settled_ts;

    // -----------------------------------------------------------------------
    // 6) Finalize the draw: Pending → Completed, winning number fixed
    // -----------------------------------------------------------------------
    draw.status = DrawStatus::Completed as u8;
    draw.completed_at = settled_ts;
    draw.winning_number = settlement.winning_number;

    msg!(
        "Draw {} settled: {} winners, outlay {} of pool {}",
        draw.draw_id,
        winners,
        settlement.total_outlay_lamports,
        draw.prize_pool_lamports
    );

    Ok(())
}
