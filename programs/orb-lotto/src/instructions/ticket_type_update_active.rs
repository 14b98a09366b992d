use anchor_lang::prelude::*;
use crate::errors::OrbLottoErrorCode;
use crate::state::config::Config;


/*** Update Ticket Type Active State */
#[derive(Accounts)]
pub struct UpdateTicketTypeActive<'info> {
    /// Global config (stores ticket types, authority, etc.)
    #[account(
        mut,
        has_one = authority @ OrbLottoErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    /// Program authority (admin / DAO / multisig)
    pub authority: Signer<'info>,
}

pub fn update_ticket_type_active_handler(
    ctx: Context<UpdateTicketTypeActive>,
    type_id: u8,
    active: u8,
) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    // Only allow 0 or 1 for now
    require!(active <= 1, OrbLottoErrorCode::InvalidTicketTypeFlag);

    cfg.set_ticket_type_active(type_id, active)?;

    Ok(())
}
