use anchor_lang::prelude::*;
use crate::errors::OrbLottoErrorCode;
use crate::state::*;

#[derive(Accounts)]
#[instruction(draw_id: u64)]
pub struct CloseDraw<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Draw::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = draw.bump,
        close = authority
    )]
    pub draw: Account<'info, Draw>,

    #[account(mut, address = config.authority)]
    pub authority: Signer<'info>,
}


/// Reclaims the Draw rent. Only terminal rounds close — a Pending draw
/// still owns live tickets and an open settlement pipeline.
pub fn close_draw_handler(ctx: Context<CloseDraw>, _draw_id: u64) -> Result<()> {
    let draw = &ctx.accounts.draw;
    require!(
        draw.is_completed() || draw.is_cancelled(),
        OrbLottoErrorCode::DrawNotCompleted
    );
    Ok(())
}
