use anchor_lang::prelude::*;
use solana_security_txt::security_txt;

// -----------------------------------------------------------------------------
// Program ID
// -----------------------------------------------------------------------------
declare_id!("5dAixx3F1drKUrJzQoVUur7DyWdgrAXE2dqD9P6nLsB8");

security_txt! {
    name: "ORB Lotto",
    project_url: "https://orblotto.app",
    source_code: "https://github.com/orb-lotto",
    contacts: "mailto:security@orblotto.app",
    policy: "https://github.com/orb-lotto/blob/main/SECURITY.md",
    preferred_languages: "en"
}


// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod state;
pub mod instructions;
pub mod utils;
pub mod errors;
pub mod constants;

use instructions::*;

// -----------------------------------------------------------------------------
// Program Entrypoints
// -----------------------------------------------------------------------------
#[program]
pub mod orb_lotto {
    use super::*;

    use crate::instructions::profile_close::close_player_profile_handler;
    use crate::instructions::ticket_close::close_ticket_handler;

    // -------------------------------------------------------------------------
    // initialize
    // -------------------------------------------------------------------------
    pub fn initialize(ctx: Context<Initialize>, sales_cutoff_seconds: i64) -> Result<()> {
        initialize_handler(ctx, sales_cutoff_seconds)
    }

    // -------------------------------------------------------------------------
    // update_config
    // -------------------------------------------------------------------------
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        pause_sales: Option<u8>,
        pause_claims: Option<u8>,
        new_authority: Option<Pubkey>,
        new_foundation_vault: Option<Pubkey>,
        new_operations_vault: Option<Pubkey>,
        new_prize_pool_bps: Option<u16>,
        new_foundation_bps: Option<u16>,
        new_tier1_bps: Option<u16>,
        new_tier2_each_bps: Option<u16>,
        new_tier3_each_bps: Option<u16>,
        new_sales_cutoff_seconds: Option<i64>,
        ticket_type_updates: Vec<TicketTypeUpdateArgs>,
    ) -> Result<()> {
        update_config_handler(
            ctx,
            pause_sales,
            pause_claims,
            new_authority,
            new_foundation_vault,
            new_operations_vault,
            new_prize_pool_bps,
            new_foundation_bps,
            new_tier1_bps,
            new_tier2_each_bps,
            new_tier3_each_bps,
            new_sales_cutoff_seconds,
            ticket_type_updates,
        )
    }

    // -------------------------------------------------------------------------
    // emergency_pause_all
    // -------------------------------------------------------------------------
    pub fn emergency_pause_all(ctx: Context<UpdateConfig>) -> Result<()> {
        update_config_handler(
            ctx,
            Some(1),
            Some(1),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            vec![],
        )
    }

    // -------------------------------------------------------------------------
    // update_ticket_type_active
    // -------------------------------------------------------------------------
    pub fn update_ticket_type_active(
        ctx: Context<UpdateTicketTypeActive>,
        type_id: u8,
        active: u8,
    ) -> Result<()> {
        update_ticket_type_active_handler(ctx, type_id, active)
    }

    // =====================================================================
    // DRAW LIFECYCLE
    // =====================================================================

    pub fn open_draw(
        ctx: Context<OpenDraw>,
        draw_id: u64,
        ticket_type: u8,
        scheduled_at: i64,
    ) -> Result<()> {
        open_draw_handler(ctx, draw_id, ticket_type, scheduled_at)
    }

    pub fn cancel_draw(ctx: Context<CancelDraw>, draw_id: u64) -> Result<()> {
        cancel_draw_handler(ctx, draw_id)
    }

    pub fn buy_ticket(ctx: Context<BuyTicket>, draw_id: u64, ticket_index: u32) -> Result<()> {
        buy_ticket_handler(ctx, draw_id, ticket_index)
    }

    // =====================================================================
    // DRAW SETTLEMENT
    // =====================================================================

    pub fn begin_draw_settlement(
        ctx: Context<BeginDrawSettlement>,
        draw_id: u64,
        winning_number: String,
        vrf_slot: u64,
        vrf_proof_hash: [u8; 32],
    ) -> Result<()> {
        begin_draw_settlement_handler(ctx, draw_id, winning_number, vrf_slot, vrf_proof_hash)
    }

    pub fn reopen_draw_settlement(
        ctx: Context<ReopenDrawSettlement>,
        draw_id: u64,
    ) -> Result<()> {
        reopen_draw_settlement_handler(ctx, draw_id)
    }

    pub fn complete_draw_settlement<'info>(
        ctx: Context<'_, '_, 'info, 'info, CompleteDrawSettlement<'info>>,
        draw_id: u64,
        tier1_winners: u32,
        tier2_winners: u32,
        tier3_winners: u32,
        foundation_lamports: u64,
        operations_lamports: u64,
    ) -> Result<()> {
        complete_draw_settlement_handler(
            ctx,
            draw_id,
            tier1_winners,
            tier2_winners,
            tier3_winners,
            foundation_lamports,
            operations_lamports,
        )
    }

    // =====================================================================
    // RESULTS / CLAIMS / REFUNDS
    // =====================================================================

    pub fn record_ticket_result(ctx: Context<RecordTicketResult>, draw_id: u64) -> Result<()> {
        record_ticket_result_handler(ctx, draw_id)
    }

    pub fn claim_prize(ctx: Context<ClaimPrize>, draw_id: u64) -> Result<()> {
        claim_prize_handler(ctx, draw_id)
    }

    pub fn refund_ticket(ctx: Context<RefundTicket>, draw_id: u64) -> Result<()> {
        refund_ticket_handler(ctx, draw_id)
    }

    // =====================================================================
    // ACCOUNT CLOSING
    // =====================================================================

    pub fn close_settlement(ctx: Context<CloseSettlement>, draw_id: u64) -> Result<()> {
        close_settlement_handler(ctx, draw_id)
    }

    pub fn close_draw(ctx: Context<CloseDraw>, draw_id: u64) -> Result<()> {
        close_draw_handler(ctx, draw_id)
    }

    pub fn close_ticket(ctx: Context<CloseTicket>) -> Result<()> {
        close_ticket_handler(ctx)
    }

    pub fn close_profile(ctx: Context<ClosePlayerProfile>) -> Result<()> {
        close_player_profile_handler(ctx)
    }
}
