use anchor_lang::prelude::*;
use crate::errors::OrbLottoErrorCode;
use crate::state::*;
use crate::state::treasury::Treasury;
use crate::utils::ticket::TICKET_NUMBER_LEN;

#[derive(Accounts)]
#[instruction(draw_id: u64)]
pub struct OpenDraw<'info> {

    #[account(
        has_one = authority @ OrbLottoErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    /// Pass treasury so the draw records where its lamports live.
    #[account(
        seeds = [Treasury::SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        init,
        payer = authority,
        space = 8 + Draw::SIZE,
        seeds = [Draw::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump
    )]
    pub draw: Account<'info, Draw>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}


pub fn open_draw_handler(
    ctx: Context<OpenDraw>,
    draw_id: u64,
    ticket_type: u8,
    scheduled_at: i64,
) -> Result<()> {
    let config = &ctx.accounts.config;
    let draw = &mut ctx.accounts.draw;

    let clock = Clock::get()?;

    // The product must exist and be on sale before a round opens for it.
    let type_cfg = config.get_ticket_type(ticket_type)?;
    require!(type_cfg.is_active(), OrbLottoErrorCode::InactiveTicketType);

    // The draw time must leave an open sales window.
    require!(
        scheduled_at > clock.unix_timestamp + config.sales_cutoff_seconds,
        OrbLottoErrorCode::InvalidSchedule
    );

    draw.draw_id = draw_id;
    draw.ticket_type = ticket_type;
    draw.status = DrawStatus::Pending as u8;
    draw.bump = ctx.bumps.draw;

    draw.scheduled_at = scheduled_at;
    draw.opened_at = clock.unix_timestamp;
    draw.completed_at = 0;
    draw.cancelled_at = 0;

    draw.tickets_sold = 0;
    draw.gross_sales_lamports = 0;
    draw.prize_pool_lamports = 0;

    draw.currency = config.currency;
    draw.winning_number = [0u8; TICKET_NUMBER_LEN];
    draw.treasury = ctx.accounts.treasury.key();

    draw.version = 1;
    draw._reserved = [0u8; 24];

    Ok(())
}
