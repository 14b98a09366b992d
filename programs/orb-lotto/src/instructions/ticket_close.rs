use anchor_lang::prelude::*;
use crate::errors::OrbLottoErrorCode;
use crate::state::*;

/// Lets a player reclaim the rent of a ticket whose draw is finished.
#[derive(Accounts)]
pub struct CloseTicket<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Draw the ticket belongs to; the ticket constraint below binds it.
    pub draw: Account<'info, Draw>,

    #[account(
        mut,
        constraint = ticket.owner == owner.key() @ OrbLottoErrorCode::Unauthorized,
        constraint = ticket.draw == draw.key() @ OrbLottoErrorCode::DrawMismatch,
        close = owner
    )]
    pub ticket: Account<'info, SoldTicket>,
}

pub fn close_ticket_handler(ctx: Context<CloseTicket>) -> Result<()> {
    let draw = &ctx.accounts.draw;
    let ticket = &ctx.accounts.ticket;

    // Completed draws: the ticket must carry its result (claimed winners or
    // recorded losers). Cancelled draws: the refund must have been taken.
    if draw.is_completed() {
        require!(
            ticket.has_claimed == 1 || ticket.is_settled(),
            OrbLottoErrorCode::TicketStillLive
        );
        if ticket.has_claimed == 0 {
            require!(
                ticket.winnings_lamports == 0,
                OrbLottoErrorCode::TicketStillLive
            );
        }
    } else if draw.is_cancelled() {
        require!(ticket.has_claimed == 1, OrbLottoErrorCode::TicketStillLive);
    } else {
        return err!(OrbLottoErrorCode::TicketStillLive);
    }

    Ok(())
}
