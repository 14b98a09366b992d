use anchor_lang::prelude::*;

use crate::constants::RATE_BPS_DENOM;
use crate::errors::OrbLottoErrorCode;
use crate::utils::resolve::{Tier, TierCounts};

/// Payout rates for one draw, captured from `Config` at settlement time.
/// Tier rates apply to the prize pool; the foundation rate applies to gross
/// sales (pool and foundation are siblings of gross, not sequential cuts).
#[derive(Clone, Copy, Debug)]
pub struct AllocationRates {
    pub foundation_bps: u16,
    pub tier1_bps: u16,
    pub tier2_each_bps: u16,
    pub tier3_each_bps: u16,
}

/// Monetary outcome of one settled draw, all amounts in lamports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrizeBreakdown {
    /// Paid in full to every Tier 1 winner.
    pub tier1_payout_lamports: u64,
    /// Paid to each Tier 2 winner (not divided among them).
    pub tier2_payout_each_lamports: u64,
    /// Paid to each Tier 3 winner.
    pub tier3_payout_each_lamports: u64,
    /// Sum of all tier payouts across all winners.
    pub total_outlay_lamports: u64,
    pub foundation_lamports: u64,
    pub operations_lamports: u64,
}

impl PrizeBreakdown {
    pub fn payout_for_tier(&self, tier: Tier) -> u64 {
        match tier {
            Tier::Tier1 => self.tier1_payout_lamports,
            Tier::Tier2 => self.tier2_payout_each_lamports,
            Tier::Tier3 => self.tier3_payout_each_lamports,
            Tier::NoMatch => 0,
        }
    }
}

/// Converts tier winner counts and the draw's money totals into per-winner
/// payouts plus the foundation/operations split.
///
/// RULES:
///   - Tier payouts are fixed fractions of `prize_pool` *per winner*; if the
///     aggregate outlay would exceed the pool this errors with
///     `PoolExhausted` instead of overpaying. The caller escalates — the
///     engine never caps payouts on its own.
///   - `foundation` is computed from `gross_sales`, which is why gross is an
///     explicit input rather than being derived from the pool.
///   - Whatever gross sales remain after the pool and the foundation is the
///     operations residual; a negative residual means the deployment's rates
///     are broken and errors with `NegativeResidual`.
pub fn allocate_prizes(
    gross_sales: u64,
    prize_pool: u64,
    counts: &TierCounts,
    rates: &AllocationRates,
) -> Result<PrizeBreakdown> {
    let tier1_payout = bps_share(prize_pool, rates.tier1_bps)?;
    let tier2_each = bps_share(prize_pool, rates.tier2_each_bps)?;
    let tier3_each = bps_share(prize_pool, rates.tier3_each_bps)?;

    let tier1_total = tier1_payout
        .checked_mul(counts.tier1 as u64)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;
    let tier2_total = tier2_each
        .checked_mul(counts.tier2 as u64)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;
    let tier3_total = tier3_each
        .checked_mul(counts.tier3 as u64)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;

    let total_outlay = tier1_total
        .checked_add(tier2_total)
        .and_then(|sum| sum.checked_add(tier3_total))
        .ok_or(OrbLottoErrorCode::MathOverflow)?;

    require!(total_outlay <= prize_pool, OrbLottoErrorCode::PoolExhausted);

    let foundation = bps_share(gross_sales, rates.foundation_bps)?;

    let operations = gross_sales
        .checked_sub(prize_pool)
        .and_then(|rest| rest.checked_sub(foundation))
        .ok_or(OrbLottoErrorCode::NegativeResidual)?;

    Ok(PrizeBreakdown {
        tier1_payout_lamports: tier1_payout,
        tier2_payout_each_lamports: tier2_each,
        tier3_payout_each_lamports: tier3_each,
        total_outlay_lamports: total_outlay,
        foundation_lamports: foundation,
        operations_lamports: operations,
    })
}

pub fn bps_share(amount: u64, bps: u16) -> Result<u64> {
    let scaled = amount
        .checked_mul(bps as u64)
        .ok_or(OrbLottoErrorCode::MathOverflow)?;
    Ok(scaled / RATE_BPS_DENOM)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_rates() -> AllocationRates {
        AllocationRates {
            foundation_bps: 1_000,
            tier1_bps: 5_000,
            tier2_each_bps: 300,
            tier3_each_bps: 40,
        }
    }

    fn counts(tier1: u32, tier2: u32, tier3: u32) -> TierCounts {
        TierCounts { tier1, tier2, tier3, no_match: 0 }
    }

    #[test]
    fn worked_example_splits_the_pot() {
        // gross 125_000 → pool 75_000 (60%), foundation 12_500 (10% of gross)
        let breakdown =
            allocate_prizes(125_000, 75_000, &counts(1, 2, 2), &default_rates()).unwrap();

        assert_eq!(breakdown.tier1_payout_lamports, 37_500);
        assert_eq!(breakdown.tier2_payout_each_lamports, 2_250);
        assert_eq!(breakdown.tier3_payout_each_lamports, 300);
        assert_eq!(breakdown.total_outlay_lamports, 37_500 + 4_500 + 600);
        assert_eq!(breakdown.foundation_lamports, 12_500);
        assert_eq!(breakdown.operations_lamports, 37_500);
    }

    #[test]
    fn foundation_share_comes_from_gross_not_from_the_pool() {
        let breakdown =
            allocate_prizes(125_000, 75_000, &counts(0, 0, 0), &default_rates()).unwrap();
        // 10% of gross, not 10% of the 75k pool.
        assert_eq!(breakdown.foundation_lamports, 12_500);
    }

    #[test]
    fn draw_without_winners_still_allocates_residuals() {
        let breakdown =
            allocate_prizes(100_000, 60_000, &counts(0, 0, 0), &default_rates()).unwrap();
        assert_eq!(breakdown.total_outlay_lamports, 0);
        assert_eq!(breakdown.foundation_lamports, 10_000);
        assert_eq!(breakdown.operations_lamports, 30_000);
        // Per-winner amounts are still quoted even with nobody in the tier.
        assert_eq!(breakdown.tier1_payout_lamports, 30_000);
    }

    #[test]
    fn pathological_winner_counts_exhaust_the_pool() {
        // 2000 tier-2 winners at 3% each would pay out 60x the pool.
        let err = allocate_prizes(1_000, 100, &counts(0, 2_000, 0), &default_rates())
            .unwrap_err();
        assert_eq!(err, OrbLottoErrorCode::PoolExhausted.into());
    }

    #[test]
    fn two_jackpot_winners_exhaust_the_pool() {
        // Each Tier 1 winner takes the full 50%; a third pushes past 100%.
        assert!(allocate_prizes(125_000, 75_000, &counts(2, 0, 0), &default_rates()).is_ok());
        let err = allocate_prizes(125_000, 75_000, &counts(3, 0, 0), &default_rates())
            .unwrap_err();
        assert_eq!(err, OrbLottoErrorCode::PoolExhausted.into());
    }

    #[test]
    fn negative_residual_is_reported_not_clamped() {
        // Pool larger than gross sales.
        let err = allocate_prizes(50_000, 75_000, &counts(0, 0, 0), &default_rates())
            .unwrap_err();
        assert_eq!(err, OrbLottoErrorCode::NegativeResidual.into());

        // Pool plus foundation exceed gross.
        let err = allocate_prizes(100_000, 95_000, &counts(0, 0, 0), &default_rates())
            .unwrap_err();
        assert_eq!(err, OrbLottoErrorCode::NegativeResidual.into());
    }

    #[test]
    fn payout_for_tier_maps_every_classification() {
        let breakdown =
            allocate_prizes(125_000, 75_000, &counts(1, 1, 1), &default_rates()).unwrap();
        assert_eq!(breakdown.payout_for_tier(Tier::Tier1), 37_500);
        assert_eq!(breakdown.payout_for_tier(Tier::Tier2), 2_250);
        assert_eq!(breakdown.payout_for_tier(Tier::Tier3), 300);
        assert_eq!(breakdown.payout_for_tier(Tier::NoMatch), 0);
    }

    #[test]
    fn oversized_amounts_overflow_loudly() {
        let err = allocate_prizes(u64::MAX, u64::MAX, &counts(0, 0, 0), &default_rates())
            .unwrap_err();
        assert_eq!(err, OrbLottoErrorCode::MathOverflow.into());
    }
}
