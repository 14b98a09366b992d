use anchor_lang::prelude::*;

use crate::errors::OrbLottoErrorCode;
use crate::state::*;
use crate::state::treasury::Treasury;
use crate::utils::transfers::debit_program_account;

/// Refunds the purchase price of a ticket from a cancelled draw.
#[derive(Accounts)]
#[instruction(draw_id: u64)]
pub struct RefundTicket<'info> {
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

    #[account(
        mut,
        seeds = [
            SoldTicket::SEED_PREFIX,
            draw.key().as_ref(),
            owner.key().as_ref(),
            ticket.index.to_le_bytes().as_ref(),
        ],
        bump = ticket.bump,
        constraint = ticket.owner == owner.key() @ OrbLottoErrorCode::Unauthorized,
        constraint = ticket.draw == draw.key() @ OrbLottoErrorCode::DrawMismatch,
    )]
    pub ticket: Account<'info, SoldTicket>,

    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        constraint = treasury.key() == draw.treasury @ OrbLottoErrorCode::TreasuryMismatch
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn refund_ticket_handler(ctx: Context<RefundTicket>, _draw_id: u64) -> Result<()> {
    let config = &ctx.accounts.config;
    let draw = &ctx.accounts.draw;
    let ticket = &mut ctx.accounts.ticket;
    let treasury = &mut ctx.accounts.treasury;

    require!(!config.is_claims_paused(), OrbLottoErrorCode::ClaimsPaused);
    require!(draw.is_cancelled(), OrbLottoErrorCode::DrawNotCancelled);

    // The claim flag doubles as the refund flag on cancelled draws.
    require!(ticket.has_claimed == 0, OrbLottoErrorCode::AlreadyClaimed);

    let amount = ticket.price_lamports;
    require!(amount > 0, OrbLottoErrorCode::InvalidClaimAmount);

    debit_program_account(
        &treasury.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        amount,
    )?;

    treasury.total_refunds_paid = treasury
        .total_refunds_paid
        .checked_add(amount)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;

    let clock = Clock::get()?;
    ticket.has_claimed = 1;
    ticket.claimed_at_ts = clock.unix_timestamp;

    Ok(())
}
