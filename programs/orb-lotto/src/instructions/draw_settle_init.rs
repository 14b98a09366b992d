use anchor_lang::prelude::*;
use crate::constants::SETTLEMENT_VERSION;
use crate::errors::OrbLottoErrorCode;
use crate::state::*;
use crate::utils::sales::is_draw_due;
use crate::utils::ticket::TicketNumber;

// -----------------------------------------------------------------------------
// BeginDrawSettlement
//
// First step in the settlement pipeline. This:
//   - Ensures the scheduled draw time has passed
//   - Ensures the draw is still Pending and actually sold tickets
//   - Validates the VRF-supplied winning number through the codec
//   - Creates the Settlement PDA and sets status = Processing
//
// Called once per draw after its scheduled time, typically by the worker
// that watches the VRF feed for new winning numbers.
// -----------------------------------------------------------------------------
#[derive(Accounts)]
#[instruction(draw_id: u64)]
pub struct BeginDrawSettlement<'info> {

    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [Draw::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = draw.bump,
        constraint = draw.draw_id == draw_id @ OrbLottoErrorCode::DrawMismatch,
    )]
    pub draw: Account<'info, Draw>,

    #[account(
        init,
        payer = authority,
        space = 8 + Settlement::SIZE,
        seeds = [Settlement::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump
    )]
    pub settlement: Account<'info, Settlement>,

    #[account(mut, address = config.authority @ OrbLottoErrorCode::Unauthorized)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
}


pub fn begin_draw_settlement_handler(
    ctx: Context<BeginDrawSettlement>,
    draw_id: u64,
    winning_number: String,
    vrf_slot: u64,
    vrf_proof_hash: [u8; 32],
) -> Result<()> {
    let config = &ctx.accounts.config;
    let draw = &ctx.accounts.draw;
    let settlement = &mut ctx.accounts.settlement;

    let clock = Clock::get()?;

    // ─────────────────────────────────────────────────────────────
    // 1) Basic validation: the draw is due and has something to settle
    // ─────────────────────────────────────────────────────────────

    require!(draw.is_pending(), OrbLottoErrorCode::DrawNotPending);

    require!(
        is_draw_due(clock.unix_timestamp, draw.scheduled_at),
        OrbLottoErrorCode::DrawNotDue
    );

    // A round nobody entered has nothing to settle; cancel it instead.
    require!(
        draw.tickets_sold > 0 && draw.gross_sales_lamports > 0,
        OrbLottoErrorCode::NoTicketsSold
    );

    let type_cfg = config.get_ticket_type(draw.ticket_type)?;
    require!(type_cfg.is_active(), OrbLottoErrorCode::InactiveTicketType);

    // No classification is possible without a valid winning number.
    let winning = TicketNumber::parse(&winning_number)
        .map_err(|_| error!(OrbLottoErrorCode::InvalidWinningNumber))?;

    // ─────────────────────────────────────────────────────────────
    // 2) Initialize Settlement identity + state-machine fields
    // ─────────────────────────────────────────────────────────────

    settlement.draw_id = draw_id;
    settlement.bump = ctx.bumps.settlement;

    settlement.winning_number = *winning.as_bytes();
    settlement.vrf_slot = vrf_slot;
    settlement.vrf_proof_hash = vrf_proof_hash;

    // Start in Processing – locked by a worker
    settlement.status = SettlementStatus::Processing as u8;
    settlement.attempt_count = 1;
    settlement.last_updated_slot = clock.slot;
    settlement.last_updated_ts = clock.unix_timestamp;

    // Resolution + allocation fields are filled in
    // `complete_draw_settlement_handler`; only the input size is known now.
    settlement.tickets_considered = draw.tickets_sold;
    settlement.tier1_winners = 0;
    settlement.tier2_winners = 0;
    settlement.tier3_winners = 0;
    settlement.tier1_payout_lamports = 0;
    settlement.tier2_payout_each_lamports = 0;
    settlement.tier3_payout_each_lamports = 0;
    settlement.total_outlay_lamports = 0;
    settlement.foundation_lamports = 0;
    settlement.operations_lamports = 0;

    settlement.claimed_winners = 0;
    settlement.claimed_lamports = 0;
    settlement.settled_at = 0;

    settlement.version = SETTLEMENT_VERSION;
    settlement._reserved = [0u8; 16];

    msg!("Settlement opened for draw {} with winning number {}", draw_id, winning);
    Ok(())
}
