use anchor_lang::prelude::*;
use crate::constants::RATE_BPS_DENOM;
use crate::errors::OrbLottoErrorCode;
use crate::state::config::Config;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Global Config PDA.
    /// Only the `authority` stored in Config is allowed to update it.
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ OrbLottoErrorCode::Unauthorized
    )]
    pub config: Account<'info, Config>,

    /// Current program authority.
    ///
    /// Must match `config.authority` due to the `has_one` constraint above.
    pub authority: Signer<'info>,
}


/// Arguments for updating one or more fields of a given ticket type.
///
/// All fields are optional:
/// - If a field is `None`, the existing value is left unchanged.
/// - `type_id` is used to locate the type inside `Config.ticket_types`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct TicketTypeUpdateArgs {
    /// Numeric ID of the ticket type to update (must match an existing
    /// TicketTypeSettings.type_id).
    pub type_id: u8,

    /// If provided, sets the active flag (0 or 1).
    pub active: Option<u8>,

    /// New ticket price in lamports (optional).
    pub price_lamports: Option<u64>,

    /// New product label, zero-padded ASCII (optional).
    pub label: Option<[u8; 8]>,
}


/// Updates one or more global configuration parameters.
///
/// - Only callable by the `authority` stored in `Config`.
/// - Any argument set to `None` is left unchanged.
/// - `ticket_type_updates` may be an empty vector (no type changes).
pub fn update_config_handler(
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
    let cfg = &mut ctx.accounts.config;

    // ─────────────────────────────────────────────
    // Pause flags
    // ─────────────────────────────────────────────
    if let Some(pause) = pause_sales {
        cfg.pause_sales = if pause == 1 { 1 } else { 0 };
    }
    if let Some(pause) = pause_claims {
        cfg.pause_claims = if pause == 1 { 1 } else { 0 };
    }

    // ─────────────────────────────────────────────
    // Authority rotation
    // ─────────────────────────────────────────────
    if let Some(new_auth) = new_authority {
        require!(new_auth != Pubkey::default(), OrbLottoErrorCode::InvalidAuthorityTarget);
        require!(new_auth != system_program::ID, OrbLottoErrorCode::InvalidAuthorityTarget);
        require!(new_auth != *ctx.program_id, OrbLottoErrorCode::InvalidAuthorityTarget);
        require!(new_auth != cfg.key(), OrbLottoErrorCode::InvalidAuthorityTarget);
        require!(new_auth != cfg.foundation_vault, OrbLottoErrorCode::InvalidAuthorityTarget);
        require!(new_auth != cfg.operations_vault, OrbLottoErrorCode::InvalidAuthorityTarget);
    }

    // ─────────────────────────────────────────────
    // Vault updates
    // ─────────────────────────────────────────────
    if let Some(new_vault) = new_foundation_vault {
        require!(new_vault != Pubkey::default(), OrbLottoErrorCode::InvalidVaultTarget);
        require!(new_vault != system_program::ID, OrbLottoErrorCode::InvalidVaultTarget);
        require!(new_vault != *ctx.program_id, OrbLottoErrorCode::InvalidVaultTarget);
        require!(new_vault != cfg.key(), OrbLottoErrorCode::InvalidVaultTarget);
    }
    if let Some(new_vault) = new_operations_vault {
        require!(new_vault != Pubkey::default(), OrbLottoErrorCode::InvalidVaultTarget);
        require!(new_vault != system_program::ID, OrbLottoErrorCode::InvalidVaultTarget);
        require!(new_vault != *ctx.program_id, OrbLottoErrorCode::InvalidVaultTarget);
        require!(new_vault != cfg.key(), OrbLottoErrorCode::InvalidVaultTarget);
    }

    // ─────────────────────────────────────────────
    // Misc globals
    // ─────────────────────────────────────────────
    if let Some(cutoff_seconds) = new_sales_cutoff_seconds {
        require!(cutoff_seconds >= 0, OrbLottoErrorCode::InvalidCutoff);
        cfg.sales_cutoff_seconds = cutoff_seconds;
    }

    // ─────────────────────────────────────────────
    // Ticket type updates (patch in-place)
    // ─────────────────────────────────────────────
    for update in ticket_type_updates.into_iter() {
        let ticket_type = cfg
            .ticket_types
            .iter_mut()
            .find(|t| t.type_id == update.type_id)
            .ok_or(OrbLottoErrorCode::UnknownTicketType)?;

        if let Some(active) = update.active {
            require!(active <= 1, OrbLottoErrorCode::InvalidTicketTypeFlag);
            ticket_type.active = active;
        }

        if let Some(price) = update.price_lamports {
            ticket_type.price_lamports = price;
        }

        if let Some(label) = update.label {
            ticket_type.label = label;
        }

        if ticket_type.active == 1 {
            require!(
                ticket_type.price_lamports > 0,
                OrbLottoErrorCode::InvalidTicketPrice
            );
        }
    }

    // ─────────────────────────────────────────────
    // Rates: compute effective -> validate -> apply ONCE
    // ─────────────────────────────────────────────
    let effective_pool_bps = new_prize_pool_bps.unwrap_or(cfg.prize_pool_bps);
    let effective_foundation_bps = new_foundation_bps.unwrap_or(cfg.foundation_bps);
    let effective_tier1_bps = new_tier1_bps.unwrap_or(cfg.tier1_bps);
    let effective_tier2_bps = new_tier2_each_bps.unwrap_or(cfg.tier2_each_bps);
    let effective_tier3_bps = new_tier3_each_bps.unwrap_or(cfg.tier3_each_bps);
    let effective_authority = new_authority.unwrap_or(cfg.authority);
    let effective_foundation_vault = new_foundation_vault.unwrap_or(cfg.foundation_vault);
    let effective_operations_vault = new_operations_vault.unwrap_or(cfg.operations_vault);

    require!(
        effective_authority != effective_foundation_vault
            && effective_authority != effective_operations_vault,
        OrbLottoErrorCode::AuthorityCannotEqualVault
    );

    // key invariant: the operations residual can never go negative by
    // construction of the rates.
    require!(
        (effective_pool_bps as u64) + (effective_foundation_bps as u64) <= RATE_BPS_DENOM,
        OrbLottoErrorCode::InvalidRateConfig
    );

    require!(effective_tier1_bps as u64 <= RATE_BPS_DENOM, OrbLottoErrorCode::InvalidRateConfig);
    require!(effective_tier2_bps as u64 <= RATE_BPS_DENOM, OrbLottoErrorCode::InvalidRateConfig);
    require!(effective_tier3_bps as u64 <= RATE_BPS_DENOM, OrbLottoErrorCode::InvalidRateConfig);

    // ----- apply ONLY the fields that were provided -----
    if let Some(v) = new_prize_pool_bps { cfg.prize_pool_bps = v; }
    if let Some(v) = new_foundation_bps { cfg.foundation_bps = v; }
    if let Some(v) = new_tier1_bps { cfg.tier1_bps = v; }
    if let Some(v) = new_tier2_each_bps { cfg.tier2_each_bps = v; }
    if let Some(v) = new_tier3_each_bps { cfg.tier3_each_bps = v; }

    if let Some(v) = new_authority { cfg.authority = v; }
    if let Some(v) = new_foundation_vault { cfg.foundation_vault = v; }
    if let Some(v) = new_operations_vault { cfg.operations_vault = v; }

    Ok(())
}
