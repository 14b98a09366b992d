use anchor_lang::prelude::*;
use crate::constants::{
    BASIC_PRICE, FOUNDATION_BPS, JACKPOT_PRICE, MEGA_PRICE, NATIVE_CURRENCY, PLUS_PRICE,
    PRIZE_POOL_BPS, SUPER_PRICE, TIER1_BPS, TIER2_EACH_BPS, TIER3_EACH_BPS,
};
use crate::errors::OrbLottoErrorCode;
use crate::state::*;
use crate::state::ticket_types::TicketTypeSettings;
use crate::state::treasury::Treasury;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Global config PDA.
    #[account(
        init,
        payer = authority,
        space = 8 + Config::SIZE,
        seeds = [Config::SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    /// Treasury PDA holding protocol lamports.
    #[account(
        init,
        payer = authority,
        space = 8 + Treasury::SIZE,
        seeds = [Treasury::SEED],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    /// CHECK: Foundation destination; validated later via `address = config.foundation_vault`.
    pub foundation_vault: UncheckedAccount<'info>,

    /// CHECK: Operations destination; validated later via `address = config.operations_vault`.
    pub operations_vault: UncheckedAccount<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>, sales_cutoff_seconds: i64) -> Result<()> {
    let authority_key = ctx.accounts.authority.key();
    let foundation_key = ctx.accounts.foundation_vault.key();
    let operations_key = ctx.accounts.operations_vault.key();
    let cfg = &mut ctx.accounts.config;

    require!(sales_cutoff_seconds >= 0, OrbLottoErrorCode::InvalidCutoff);
    require!(
        foundation_key != Pubkey::default() && operations_key != Pubkey::default(),
        OrbLottoErrorCode::InvalidVaultTarget
    );
    require!(
        authority_key != foundation_key && authority_key != operations_key,
        OrbLottoErrorCode::AuthorityCannotEqualVault
    );

    let clock = Clock::get()?;

    // ────────────────────────────────────────────────
    // Initialize config
    // ────────────────────────────────────────────────
    cfg.pause_sales = 0;
    cfg.pause_claims = 0;

    cfg.authority = authority_key;
    cfg.foundation_vault = foundation_key;
    cfg.operations_vault = operations_key;

    cfg.prize_pool_bps = PRIZE_POOL_BPS;
    cfg.foundation_bps = FOUNDATION_BPS;
    cfg.tier1_bps = TIER1_BPS;
    cfg.tier2_each_bps = TIER2_EACH_BPS;
    cfg.tier3_each_bps = TIER3_EACH_BPS;

    cfg.sales_cutoff_seconds = sales_cutoff_seconds;
    cfg.started_at = clock.unix_timestamp;
    cfg.currency = NATIVE_CURRENCY;

    cfg.bump = ctx.bumps.config;
    cfg._reserved = [0; 16];

    cfg.ticket_types = [
        TicketTypeSettings {
            type_id: 1,
            active: 1,
            price_lamports: BASIC_PRICE,
            label: *b"Basic\0\0\0",
            _reserved: [0; 10],
        },
        TicketTypeSettings {
            type_id: 2,
            active: 1,
            price_lamports: PLUS_PRICE,
            label: *b"Plus\0\0\0\0",
            _reserved: [0; 10],
        },
        TicketTypeSettings {
            type_id: 3,
            active: 1,
            price_lamports: SUPER_PRICE,
            label: *b"Super\0\0\0",
            _reserved: [0; 10],
        },
        TicketTypeSettings {
            type_id: 4,
            active: 0,
            price_lamports: MEGA_PRICE,
            label: *b"Mega\0\0\0\0",
            _reserved: [0; 10],
        },
        TicketTypeSettings {
            type_id: 5,
            active: 0,
            price_lamports: JACKPOT_PRICE,
            label: *b"Jackpot\0",
            _reserved: [0; 10],
        },
    ];

    // ────────────────────────────────────────────────
    // Initialize treasury
    // ────────────────────────────────────────────────
    let treasury = &mut ctx.accounts.treasury;
    treasury.authority = authority_key;
    treasury.bump = ctx.bumps.treasury;
    treasury.total_in_lamports = 0;
    treasury.total_prizes_paid = 0;
    treasury.total_refunds_paid = 0;
    treasury.total_foundation_withdrawn = 0;
    treasury.total_operations_withdrawn = 0;
    treasury.version = 1;
    treasury._reserved = [0; 32];

    Ok(())
}
