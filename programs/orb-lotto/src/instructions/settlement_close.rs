use anchor_lang::prelude::*;
use crate::errors::OrbLottoErrorCode;
use crate::state::*;

#[derive(Accounts)]
#[instruction(draw_id: u64)]
pub struct CloseSettlement<'info> {
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
        seeds = [Settlement::SEED_PREFIX, draw_id.to_le_bytes().as_ref()],
        bump = settlement.bump,
        close = authority
    )]
    pub settlement: Account<'info, Settlement>,

    #[account(mut, address = config.authority)]
    pub authority: Signer<'info>,
}


/// Reclaims the Settlement rent once a draw is done. Only settled records
/// close; a Processing record still belongs to the worker.
pub fn close_settlement_handler(ctx: Context<CloseSettlement>, _draw_id: u64) -> Result<()> {
    require!(
        ctx.accounts.settlement.is_settled(),
        OrbLottoErrorCode::DrawNotCompleted
    );
    require!(
        ctx.accounts.draw.is_completed(),
        OrbLottoErrorCode::DrawNotCompleted
    );
    Ok(())
}
