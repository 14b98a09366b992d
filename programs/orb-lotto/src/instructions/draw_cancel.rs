use anchor_lang::prelude::*;
use crate::errors::OrbLottoErrorCode;
use crate::state::*;

#[derive(Accounts)]
#[instruction(draw_id: u64)]
pub struct CancelDraw<'info> {
    #[account(
        has_one = authority @ OrbLottoErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Draw::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = draw.bump,
    )]
    pub draw: Account<'info, Draw>,

    pub authority: Signer<'info>,
}

/// Aborts a round before settlement. A cancelled draw keeps its sales
/// totals so every ticket can be refunded from the treasury; the status can
/// never move again afterwards.
pub fn cancel_draw_handler(ctx: Context<CancelDraw>, _draw_id: u64) -> Result<()> {
    let draw = &mut ctx.accounts.draw;

    require!(draw.is_pending(), OrbLottoErrorCode::DrawNotPending);

    let clock = Clock::get()?;
    draw.status = DrawStatus::Cancelled as u8;
    draw.cancelled_at = clock.unix_timestamp;

    msg!("Draw {} cancelled with {} tickets sold", draw.draw_id, draw.tickets_sold);
    Ok(())
}
