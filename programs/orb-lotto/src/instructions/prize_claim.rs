use anchor_lang::prelude::*;

use crate::errors::OrbLottoErrorCode;
use crate::state::*;
use crate::state::player_profile::PlayerProfile;
use crate::state::treasury::Treasury;
use crate::utils::resolve::classify_ticket;
use crate::utils::ticket::TicketNumber;
use crate::utils::transfers::debit_program_account;

/// Allows a winner to claim their payout for a settled draw.
///
/// The ticket's tier is recomputed on-chain from the stored winning number —
/// the classification is deterministic, so the claim needs no off-chain
/// proof material, and any cached result on the ticket must agree with the
/// recomputation. Double-claims are prevented by the ticket's claim flag.
#[derive(Accounts)]
#[instruction(draw_id: u64)]
pub struct ClaimPrize<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [Draw::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Account<'info, Draw>,

    /// Settlement snapshot containing payouts and claim tracking.
    #[account(
        mut,
        seeds = [Settlement::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = settlement.bump,
        constraint = settlement.settled_at != 0 @ OrbLottoErrorCode::ClaimNotAllowed
    )]
    pub settlement: Account<'info, Settlement>,

    /// Ticket being claimed, owned by the claiming wallet.
    #[account(
        mut,
        seeds = [
            SoldTicket::SEED_PREFIX,
            draw.key().as_ref(),
            claimer.key().as_ref(),
            ticket.index.to_le_bytes().as_ref(),
        ],
        bump = ticket.bump,
        constraint = ticket.owner == claimer.key() @ OrbLottoErrorCode::Unauthorized,
        constraint = ticket.draw == draw.key() @ OrbLottoErrorCode::DrawMismatch,
    )]
    pub ticket: Account<'info, SoldTicket>,

    #[account(
        init_if_needed,
        payer = claimer,
        space = 8 + PlayerProfile::SIZE,
        seeds = [PlayerProfile::SEED_PREFIX, claimer.key().as_ref()],
        bump,
        constraint = profile.player == Pubkey::default()
            || profile.player == claimer.key() @ OrbLottoErrorCode::Unauthorized
    )]
    pub profile: Box<Account<'info, PlayerProfile>>,

    /// Treasury holding lamports for all payouts.
    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// Wallet receiving the payout.
    #[account(mut)]
    pub claimer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn claim_prize_handler(ctx: Context<ClaimPrize>, _draw_id: u64) -> Result<()> {
    let config = &ctx.accounts.config;
    let draw = &ctx.accounts.draw;
    let settlement = &mut ctx.accounts.settlement;
    let ticket = &mut ctx.accounts.ticket;
    let profile = &mut ctx.accounts.profile;
    let treasury = &mut ctx.accounts.treasury;
    let claimer = &ctx.accounts.claimer;

    require!(!config.is_claims_paused(), OrbLottoErrorCode::ClaimsPaused);

    // Only settled draws pay out
    require!(draw.is_completed(), OrbLottoErrorCode::DrawNotCompleted);
    require!(settlement.is_settled(), OrbLottoErrorCode::ClaimNotAllowed);

    // Claim must not have been processed already
    require!(ticket.has_claimed == 0, OrbLottoErrorCode::AlreadyClaimed);

    // ─────────────────────────────
    // Recompute the classification
    // ─────────────────────────────
    let winning = TicketNumber::from_bytes(&settlement.winning_number)
        .map_err(|_| error!(OrbLottoErrorCode::InvalidWinningNumber))?;
    let number = TicketNumber::from_bytes(&ticket.number)?;
    let tier = classify_ticket(&winning, &number);

    require!(tier.is_winning(), OrbLottoErrorCode::NotAWinner);

    // A previously recorded result must agree with the recomputation.
    if ticket.is_settled() {
        require!(
            ticket.tier == tier.as_u8(),
            OrbLottoErrorCode::AssertInvariantFailed
        );
    }

    let amount = settlement.payout_for_tier(tier);
    require!(amount > 0, OrbLottoErrorCode::InvalidClaimAmount);

    // Ensure the claim stays within the settled outlay
    let remaining = settlement
        .total_outlay_lamports
        .checked_sub(settlement.claimed_lamports)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;
    require!(amount <= remaining, OrbLottoErrorCode::InsufficientPrizePool);

    require!(
        settlement.claimed_winners < settlement.total_winners() as u32,
        OrbLottoErrorCode::ClaimNotAllowed
    );

    // ─────────────────────────────
    // Pay out and record
    // ─────────────────────────────
    debit_program_account(
        &treasury.to_account_info(),
        &claimer.to_account_info(),
        amount,
    )?;

    treasury.total_prizes_paid = treasury
        .total_prizes_paid
        .checked_add(amount)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;

    settlement.claimed_lamports = settlement
        .claimed_lamports
        .checked_add(amount)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;
    settlement.claimed_winners = settlement
        .claimed_winners
        .checked_add(1)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;

    let clock = Clock::get()?;
    ticket.tier = tier.as_u8();
    ticket.winnings_lamports = amount;
    ticket.has_claimed = 1;
    ticket.claimed_at_ts = clock.unix_timestamp;

    // The ticket PDA binds to the buyer, so the profile normally exists
    // already; a blank one only appears if it was closed in between.
    if profile.player == Pubkey::default() {
        profile.player = claimer.key();
        profile.bump = ctx.bumps.profile;
    }
    profile.total_lamports_won = profile
        .total_lamports_won
        .checked_add(amount)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;
    profile.total_wins = profile
        .total_wins
        .checked_add(1)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;

    msg!(
        "Ticket {} claimed tier {} payout {}",
        number,
        tier.as_u8(),
        amount
    );

    Ok(())
}
