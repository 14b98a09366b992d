use anchor_lang::prelude::*;

use crate::constants::{MAX_TICKETS_PER_DRAW, RECENT_TICKETS_CAP};
use crate::errors::OrbLottoErrorCode;
use crate::state::*;
use crate::state::player_profile::PlayerProfile;
use crate::state::treasury::Treasury;
use crate::utils::sales::is_sales_open;
use crate::utils::ticket::{ticket_seed, TicketNumber};
use crate::utils::transfers::transfer_lamports;

#[derive(Accounts)]
#[instruction(draw_id: u64, ticket_index: u32)]
pub struct BuyTicket<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [Draw::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Box<Account<'info, Draw>>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + DrawEntry::SIZE,
        seeds = [
            DrawEntry::SEED_PREFIX,
            draw.key().as_ref(),
            buyer.key().as_ref(),
        ],
        bump,
        constraint = entry.player == Pubkey::default()
            || entry.player == buyer.key() @ OrbLottoErrorCode::Unauthorized
    )]
    pub entry: Box<Account<'info, DrawEntry>>,

    #[account(
        init,
        payer = buyer,
        space = 8 + SoldTicket::SIZE,
        seeds = [
            SoldTicket::SEED_PREFIX,
            draw.key().as_ref(),
            buyer.key().as_ref(),
            ticket_index.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub ticket: Box<Account<'info, SoldTicket>>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + PlayerProfile::SIZE,
        seeds = [PlayerProfile::SEED_PREFIX, buyer.key().as_ref()],
        bump,
        constraint = profile.player == Pubkey::default()
            || profile.player == buyer.key() @ OrbLottoErrorCode::Unauthorized
    )]
    pub profile: Box<Account<'info, PlayerProfile>>,

    #[account(
        mut,
        seeds = [Treasury::SEED],
        bump = treasury.bump,
        constraint = treasury.key() == draw.treasury @ OrbLottoErrorCode::TreasuryMismatch
    )]
    pub treasury: Box<Account<'info, Treasury>>,

    #[account(
      seeds = [Config::SEED],
      bump = config.bump,
    )]
    pub config: Box<Account<'info, Config>>,

    pub system_program: Program<'info, System>,
}

pub fn buy_ticket_handler(
    ctx: Context<BuyTicket>,
    _draw_id: u64,
    ticket_index: u32,
) -> Result<()> {
    let draw = &mut ctx.accounts.draw;
    let entry = &mut ctx.accounts.entry;
    let ticket = &mut ctx.accounts.ticket;
    let profile = &mut ctx.accounts.profile;
    let treasury = &mut ctx.accounts.treasury;
    let config = &ctx.accounts.config;
    let buyer = &ctx.accounts.buyer;

    let clock = Clock::get()?;

    // ─────────────────────────────
    // Basic validations
    // ─────────────────────────────
    require!(!config.is_sales_paused(), OrbLottoErrorCode::SalesPaused);
    require!(draw.is_pending(), OrbLottoErrorCode::DrawNotPending);

    require!(
        is_sales_open(clock.unix_timestamp, draw.scheduled_at, config.sales_cutoff_seconds),
        OrbLottoErrorCode::SalesClosed
    );

    let type_cfg = config.get_ticket_type(draw.ticket_type)?;
    require!(type_cfg.is_active(), OrbLottoErrorCode::InactiveTicketType);

    // ─────────────────────────────
    // Enforce the per-draw ticket cap
    // ─────────────────────────────
    require!(
        entry.tickets_bought < MAX_TICKETS_PER_DRAW,
        OrbLottoErrorCode::TicketCapReached
    );

    // The index argument seeds the ticket PDA; it must be the next slot.
    require!(
        ticket_index == entry.tickets_bought,
        OrbLottoErrorCode::InvalidTicketIndex
    );

    // ─────────────────────────────
    // Collect payment
    // ─────────────────────────────
    let price = type_cfg.price_lamports;
    transfer_lamports(
        &buyer.to_account_info(),
        &treasury.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        price,
    )?;

    treasury.total_in_lamports = treasury
        .total_in_lamports
        .checked_add(price)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;

    draw.record_sale(price, config.prize_pool_bps)?;

    // ─────────────────────────────
    // Initialize / hydrate DrawEntry
    // ─────────────────────────────
    let first_ticket_in_draw = entry.player == Pubkey::default();
    if first_ticket_in_draw {
        entry.draw = draw.key();
        entry.player = buyer.key();
        entry.bump = ctx.bumps.entry;
        entry.tickets_bought = 0;
        entry.lamports_spent = 0;
        entry._reserved = [0u8; 8];
    }

    entry.tickets_bought = entry
        .tickets_bought
        .checked_add(1)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;
    entry.lamports_spent = entry
        .lamports_spent
        .checked_add(price)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;

    // ─────────────────────────────
    // Issue the ticket
    // ─────────────────────────────
    let seed = ticket_seed(
        &draw.key(),
        &buyer.key(),
        ticket_index,
        clock.slot,
        clock.unix_timestamp,
    );
    let number = TicketNumber::from_seed(&seed);

    ticket.draw = draw.key();
    ticket.owner = buyer.key();
    ticket.index = ticket_index;
    ticket.number = *number.as_bytes();
    ticket.price_lamports = price;
    ticket.currency = draw.currency;
    ticket.purchased_at = clock.unix_timestamp;
    ticket.purchased_slot = clock.slot;

    ticket.tier = TIER_UNSETTLED;
    ticket.winnings_lamports = 0;
    ticket.has_claimed = 0;
    ticket.claimed_at_ts = 0;

    ticket.bump = ctx.bumps.ticket;
    ticket.version = 1;
    ticket._reserved = [0u8; 16];

    msg!("Issued ticket {} for draw {}", number, draw.draw_id);

    // ─────────────────────────────
    // Initialize / hydrate PlayerProfile
    // ─────────────────────────────
    if profile.player == Pubkey::default() {
        profile.player = buyer.key();
        profile.bump = ctx.bumps.profile;

        profile.total_tickets = 0;
        profile.draws_entered = 0;
        profile.total_lamports_spent = 0;
        profile.total_lamports_won = 0;
        profile.total_wins = 0;
        profile.first_played_at = clock.unix_timestamp;
        profile.last_played_at = 0;

        profile.recent_tickets = [Pubkey::default(); RECENT_TICKETS_CAP];
        profile.recent_tickets_len = 0;
        profile.recent_tickets_head = 0;
        profile.locked_until_ts = 0;
        profile.version = 1;
        profile._reserved = [0u8; 16];
    }

    profile.total_tickets = profile
        .total_tickets
        .checked_add(1)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;
    profile.total_lamports_spent = profile
        .total_lamports_spent
        .checked_add(price)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;
    if first_ticket_in_draw {
        profile.draws_entered = profile
            .draws_entered
            .checked_add(1)
            .ok_or(OrbLottoErrorCode::MathOverflow)?;
    }
    profile.last_played_at = clock.unix_timestamp;
    profile.locked_until_ts = profile.locked_until_ts.max(draw.scheduled_at);
    profile.push_recent_ticket(ticket.key());

    Ok(())
}
