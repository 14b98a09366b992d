use anchor_lang::prelude::*;

use crate::utils::resolve::Tier;
use crate::utils::ticket::TICKET_NUMBER_LEN;

#[repr(u8)]
pub enum SettlementStatus {
    Failed = 0,     // something went wrong off-chain, can be retried
    Processing = 1, // worker holds the lock and is computing results
    Settled = 2,    // fully finalized on-chain
}

/// ---------------------------------------------------------------------------
/// Settlement
/// ---------------------------------------------------------------------------
///
/// Finalized record of one draw's resolution, created once the scheduled
/// draw time has passed and the VRF winning number is known.
///
/// This struct acts as the **ledger entry** for the draw:
/// - pins the winning number and its VRF provenance
/// - stores tier winner counts and the per-winner payout amounts
/// - stores the foundation/operations split
/// - tracks claim progress
///
/// ⚠️ Lamports themselves are **never held here** — prize money stays in the
/// central Treasury PDA until claimed. Everything stored here is re-derivable
/// from the ticket set and the winning number; the account is a cache of that
/// deterministic computation, kept so claims don't re-scan the whole draw.
#[account]
pub struct Settlement {
    // Identification
    pub draw_id: u64,
    pub status: u8,
    pub bump: u8,

    /// Winning number in normalized codec form.
    pub winning_number: [u8; TICKET_NUMBER_LEN],

    // VRF provenance
    pub vrf_slot: u64,
    pub vrf_proof_hash: [u8; 32],

    // Processing metadata
    pub attempt_count: u8,
    pub last_updated_slot: u64,
    pub last_updated_ts: i64,

    // Resolution
    pub tickets_considered: u32,
    pub tier1_winners: u32,
    pub tier2_winners: u32,
    pub tier3_winners: u32,

    // Allocation (all lamports)
    pub tier1_payout_lamports: u64,
    pub tier2_payout_each_lamports: u64,
    pub tier3_payout_each_lamports: u64,
    pub total_outlay_lamports: u64,
    pub foundation_lamports: u64,
    pub operations_lamports: u64,

    // Claims
    pub claimed_winners: u32,
    pub claimed_lamports: u64,
    pub settled_at: i64,

    // Versioning / extensions
    pub version: u8,
    pub _reserved: [u8; 16],
}

impl Settlement {
    pub const SEED_PREFIX: &'static [u8] = b"settlement";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    pub const SIZE: usize =
        8   + // draw_id
            1   + // status
            1   + // bump
            TICKET_NUMBER_LEN + // winning_number
            8   + // vrf_slot
            32  + // vrf_proof_hash
            1   + // attempt_count
            8   + // last_updated_slot
            8   + // last_updated_ts
            4   + // tickets_considered
            4   + // tier1_winners
            4   + // tier2_winners
            4   + // tier3_winners
            8   + // tier1_payout_lamports
            8   + // tier2_payout_each_lamports
            8   + // tier3_payout_each_lamports
            8   + // total_outlay_lamports
            8   + // foundation_lamports
            8   + // operations_lamports
            4   + // claimed_winners
            8   + // claimed_lamports
            8   + // settled_at
            1   + // version
            16;   // reserved

    pub fn is_settled(&self) -> bool {
        self.status == SettlementStatus::Settled as u8
    }

    /// Per-winner payout for a tier, from the snapshot.
    pub fn payout_for_tier(&self, tier: Tier) -> u64 {
        match tier {
            Tier::Tier1 => self.tier1_payout_lamports,
            Tier::Tier2 => self.tier2_payout_each_lamports,
            Tier::Tier3 => self.tier3_payout_each_lamports,
            Tier::NoMatch => 0,
        }
    }

    pub fn total_winners(&self) -> u64 {
        self.tier1_winners as u64 + self.tier2_winners as u64 + self.tier3_winners as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    #[test]
    fn settlement_size_matches_serialization() {
        let settlement = Settlement {
            draw_id: 0,
            status: 0,
            bump: 0,
            winning_number: [0; TICKET_NUMBER_LEN],
            vrf_slot: 0,
            vrf_proof_hash: [0u8; 32],
            attempt_count: 0,
            last_updated_slot: 0,
            last_updated_ts: 0,
            tickets_considered: 0,
            tier1_winners: 0,
            tier2_winners: 0,
            tier3_winners: 0,
            tier1_payout_lamports: 0,
            tier2_payout_each_lamports: 0,
            tier3_payout_each_lamports: 0,
            total_outlay_lamports: 0,
            foundation_lamports: 0,
            operations_lamports: 0,
            claimed_winners: 0,
            claimed_lamports: 0,
            settled_at: 0,
            version: 0,
            _reserved: [0u8; 16],
        };

        let bytes = settlement.try_to_vec().unwrap();
        assert_eq!(bytes.len(), Settlement::SIZE);
    }

    #[test]
    fn payout_lookup_follows_the_snapshot() {
        let mut settlement = Settlement {
            draw_id: 0,
            status: SettlementStatus::Settled as u8,
            bump: 0,
            winning_number: *b"93A 29521",
            vrf_slot: 0,
            vrf_proof_hash: [0u8; 32],
            attempt_count: 1,
            last_updated_slot: 0,
            last_updated_ts: 0,
            tickets_considered: 6,
            tier1_winners: 1,
            tier2_winners: 2,
            tier3_winners: 2,
            tier1_payout_lamports: 37_500,
            tier2_payout_each_lamports: 2_250,
            tier3_payout_each_lamports: 300,
            total_outlay_lamports: 42_600,
            foundation_lamports: 12_500,
            operations_lamports: 37_500,
            claimed_winners: 0,
            claimed_lamports: 0,
            settled_at: 0,
            version: 1,
            _reserved: [0u8; 16],
        };

        assert_eq!(settlement.payout_for_tier(Tier::Tier1), 37_500);
        assert_eq!(settlement.payout_for_tier(Tier::NoMatch), 0);
        assert_eq!(settlement.total_winners(), 5);

        settlement.tier2_winners = 0;
        assert_eq!(settlement.total_winners(), 3);
    }
}
