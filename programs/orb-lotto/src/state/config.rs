use anchor_lang::prelude::*;

use crate::errors::OrbLottoErrorCode;
use crate::state::ticket_types::TicketTypeSettings;
use crate::utils::allocate::AllocationRates;

/// Global configuration PDA.
///
/// Stores protocol-wide controls (authority, vault routing, pause flags),
/// the sales split and tier payout rates, and the ticket type table. This
/// account holds no lamports.
#[account]
pub struct Config {
    /// 1 = ticket sales paused, 0 = enabled.
    pub pause_sales: u8,

    /// 1 = prize claims/refunds paused, 0 = enabled.
    pub pause_claims: u8,

    /// Program admin authority.
    pub authority: Pubkey,

    /// Destination for the foundation share of each settled draw.
    pub foundation_vault: Pubkey,

    /// Destination for the operations residual of each settled draw.
    pub operations_vault: Pubkey,

    /// Share of gross sales accrued into the prize pool (basis points).
    pub prize_pool_bps: u16,

    /// Share of gross sales routed to the foundation (basis points).
    pub foundation_bps: u16,

    /// Tier 1 payout as a share of the prize pool (basis points).
    pub tier1_bps: u16,

    /// Per-winner Tier 2 payout as a share of the prize pool (basis points).
    pub tier2_each_bps: u16,

    /// Per-winner Tier 3 payout as a share of the prize pool (basis points).
    pub tier3_each_bps: u16,

    /// Seconds before the scheduled draw time at which sales close.
    pub sales_cutoff_seconds: i64,

    /// Unix timestamp when the protocol was initialized.
    pub started_at: i64,

    /// Currency tag stamped on new draws and tickets.
    pub currency: [u8; 8],

    /// Ticket type configurations (fixed-size array).
    pub ticket_types: [TicketTypeSettings; 5],

    /// PDA bump for Config.
    pub bump: u8,

    /// Reserved space for future upgrades.
    pub _reserved: [u8; 16],
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        1 +  // pause_sales
            1 +  // pause_claims
            32 + // authority
            32 + // foundation_vault
            32 + // operations_vault
            2 +  // prize_pool_bps
            2 +  // foundation_bps
            2 +  // tier1_bps
            2 +  // tier2_each_bps
            2 +  // tier3_each_bps
            8 +  // sales_cutoff_seconds
            8 +  // started_at
            8 +  // currency
            (TicketTypeSettings::SIZE * 5) + // ticket_types
            1 +  // bump
            16;  // reserved

    /// Returns ticket type settings by type id (1..=5).
    pub fn get_ticket_type(&self, type_id: u8) -> Result<TicketTypeSettings> {
        self.ticket_types
            .iter()
            .find(|t| t.type_id == type_id)
            .copied()
            .ok_or_else(|| error!(OrbLottoErrorCode::UnknownTicketType))
    }

    /// Sets the `active` flag for a ticket type.
    pub fn set_ticket_type_active(&mut self, type_id: u8, active: u8) -> Result<()> {
        let settings = self
            .ticket_types
            .iter_mut()
            .find(|t| t.type_id == type_id)
            .ok_or_else(|| error!(OrbLottoErrorCode::UnknownTicketType))?;

        if active == 1 {
            require!(
                settings.price_lamports > 0,
                OrbLottoErrorCode::InvalidTicketPrice
            );
        }

        settings.active = active;
        Ok(())
    }

    /// Rates captured by the allocator at settlement time.
    pub fn allocation_rates(&self) -> AllocationRates {
        AllocationRates {
            foundation_bps: self.foundation_bps,
            tier1_bps: self.tier1_bps,
            tier2_each_bps: self.tier2_each_bps,
            tier3_each_bps: self.tier3_each_bps,
        }
    }

    pub fn is_sales_paused(&self) -> bool {
        self.pause_sales != 0
    }

    pub fn is_claims_paused(&self) -> bool {
        self.pause_claims != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NATIVE_CURRENCY;
    use anchor_lang::AnchorSerialize;

    fn default_type(type_id: u8) -> TicketTypeSettings {
        TicketTypeSettings {
            type_id,
            active: 0,
            price_lamports: 0,
            label: [0; 8],
            _reserved: [0; 10],
        }
    }

    #[test]
    fn config_size_matches_serialization() {
        let ticket_types = [
            default_type(1),
            default_type(2),
            default_type(3),
            default_type(4),
            default_type(5),
        ];

        let cfg = Config {
            pause_sales: 0,
            pause_claims: 0,
            authority: Pubkey::default(),
            foundation_vault: Pubkey::default(),
            operations_vault: Pubkey::default(),
            prize_pool_bps: 6_000,
            foundation_bps: 1_000,
            tier1_bps: 5_000,
            tier2_each_bps: 300,
            tier3_each_bps: 40,
            sales_cutoff_seconds: 0,
            started_at: 0,
            currency: NATIVE_CURRENCY,
            ticket_types,
            bump: 0,
            _reserved: [0; 16],
        };

        let bytes = cfg.try_to_vec().unwrap();
        assert_eq!(bytes.len(), Config::SIZE);
    }

    #[test]
    fn ticket_type_lookup_by_id() {
        let mut ticket_types = [
            default_type(1),
            default_type(2),
            default_type(3),
            default_type(4),
            default_type(5),
        ];
        ticket_types[1].price_lamports = 42;

        let cfg = Config {
            pause_sales: 0,
            pause_claims: 0,
            authority: Pubkey::default(),
            foundation_vault: Pubkey::default(),
            operations_vault: Pubkey::default(),
            prize_pool_bps: 6_000,
            foundation_bps: 1_000,
            tier1_bps: 5_000,
            tier2_each_bps: 300,
            tier3_each_bps: 40,
            sales_cutoff_seconds: 0,
            started_at: 0,
            currency: NATIVE_CURRENCY,
            ticket_types,
            bump: 0,
            _reserved: [0; 16],
        };

        assert_eq!(cfg.get_ticket_type(2).unwrap().price_lamports, 42);
        assert!(cfg.get_ticket_type(9).is_err());
    }
}
