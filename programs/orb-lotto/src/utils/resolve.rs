use anchor_lang::prelude::*;

use crate::errors::OrbLottoErrorCode;
use crate::utils::ticket::TicketNumber;

/// Prize tier for one ticket. `NoMatch` is a real classification (and is
/// cached on the ticket), distinct from "not settled yet" which is stored
/// as 0 on `SoldTicket`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Tier {
    Tier1 = 1,
    Tier2 = 2,
    Tier3 = 3,
    NoMatch = 4,
}

impl Tier {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Tier::Tier1),
            2 => Some(Tier::Tier2),
            3 => Some(Tier::Tier3),
            4 => Some(Tier::NoMatch),
            _ => None,
        }
    }

    pub fn is_winning(self) -> bool {
        !matches!(self, Tier::NoMatch)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub tier1: u32,
    pub tier2: u32,
    pub tier3: u32,
    pub no_match: u32,
}

impl TierCounts {
    pub fn total(&self) -> u64 {
        self.tier1 as u64 + self.tier2 as u64 + self.tier3 as u64 + self.no_match as u64
    }

    pub fn winners(&self) -> u64 {
        self.tier1 as u64 + self.tier2 as u64 + self.tier3 as u64
    }
}

/// Classification of a full ticket set against one winning number.
///
/// `outcomes` is sorted by ticket id, so two resolutions of the same draw
/// are byte-identical regardless of the order tickets were supplied in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawResolution {
    pub outcomes: Vec<(Pubkey, Tier)>,
    pub counts: TierCounts,
}

/// Classifies one ticket. Tiers are checked in priority order: an exact
/// match is Tier 1 even though it trivially also matches both suffixes.
pub fn classify_ticket(winning: &TicketNumber, ticket: &TicketNumber) -> Tier {
    if ticket == winning {
        return Tier::Tier1;
    }
    if ticket.last_digits(5) == winning.last_digits(5) {
        return Tier::Tier2;
    }
    if ticket.last_digits(4) == winning.last_digits(4) {
        return Tier::Tier3;
    }
    Tier::NoMatch
}

/// Resolves a complete draw: every sold ticket is assigned exactly one tier.
///
/// Pure and deterministic over its inputs, so it can be re-run at any time
/// (settlement verification, claim checks, audits) and must always agree
/// with whatever result was persisted. Duplicate ticket numbers are allowed
/// and all classify independently — an exact duplicate of the winning
/// number counts as another Tier 1 winner.
pub fn resolve_draw(
    winning_number: &str,
    tickets: &[(Pubkey, TicketNumber)],
) -> Result<DrawResolution> {
    let winning = TicketNumber::parse(winning_number)
        .map_err(|_| error!(OrbLottoErrorCode::InvalidWinningNumber))?;
    resolve_draw_against(&winning, tickets)
}

/// As `resolve_draw`, for callers that already hold a validated number.
pub fn resolve_draw_against(
    winning: &TicketNumber,
    tickets: &[(Pubkey, TicketNumber)],
) -> Result<DrawResolution> {
    let mut counts = TierCounts::default();
    let mut outcomes: Vec<(Pubkey, Tier)> = Vec::with_capacity(tickets.len());

    for (id, number) in tickets.iter() {
        let tier = classify_ticket(winning, number);
        match tier {
            Tier::Tier1 => counts.tier1 += 1,
            Tier::Tier2 => counts.tier2 += 1,
            Tier::Tier3 => counts.tier3 += 1,
            Tier::NoMatch => counts.no_match += 1,
        }
        outcomes.push((*id, tier));
    }

    outcomes.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(DrawResolution { outcomes, counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(s: &str) -> TicketNumber {
        TicketNumber::parse(s).unwrap()
    }

    fn ticket_set(numbers: &[&str]) -> Vec<(Pubkey, TicketNumber)> {
        numbers
            .iter()
            .map(|s| (Pubkey::new_unique(), ticket(s)))
            .collect()
    }

    #[test]
    fn worked_example_from_the_product_rules() {
        let tickets = ticket_set(&[
            "93A 29521",
            "67B 29521",
            "15G 29521",
            "22F 19521",
            "33D 39521",
            "44C 12345",
        ]);
        let resolution = resolve_draw("93A 29521", &tickets).unwrap();

        let by_id: std::collections::HashMap<Pubkey, Tier> =
            resolution.outcomes.iter().copied().collect();
        let expected = [
            Tier::Tier1,
            Tier::Tier2,
            Tier::Tier2,
            Tier::Tier3,
            Tier::Tier3,
            Tier::NoMatch,
        ];
        for ((id, _), want) in tickets.iter().zip(expected) {
            assert_eq!(by_id[id], want);
        }
        assert_eq!(
            resolution.counts,
            TierCounts { tier1: 1, tier2: 2, tier3: 2, no_match: 1 }
        );
    }

    #[test]
    fn exact_match_outranks_the_suffix_tiers() {
        let winning = ticket("93A 29521");
        assert_eq!(classify_ticket(&winning, &ticket("93A 29521")), Tier::Tier1);
        assert_eq!(classify_ticket(&winning, &ticket("00Z 29521")), Tier::Tier2);
        assert_eq!(classify_ticket(&winning, &ticket("93A 19521")), Tier::Tier3);
        assert_eq!(classify_ticket(&winning, &ticket("93A 29522")), Tier::NoMatch);
    }

    #[test]
    fn duplicate_winning_numbers_all_count_as_tier1() {
        let tickets = ticket_set(&["93A 29521", "93A 29521", "44C 12345"]);
        let resolution = resolve_draw("93A 29521", &tickets).unwrap();
        assert_eq!(resolution.counts.tier1, 2);
        assert_eq!(resolution.counts.no_match, 1);
    }

    #[test]
    fn resolution_is_order_independent() {
        let tickets = ticket_set(&[
            "93A 29521",
            "67B 29521",
            "22F 19521",
            "44C 12345",
            "11Q 90521",
        ]);
        let forward = resolve_draw("93A 29521", &tickets).unwrap();

        let mut reversed = tickets.clone();
        reversed.reverse();
        assert_eq!(forward, resolve_draw("93A 29521", &reversed).unwrap());

        let mut rotated = tickets.clone();
        rotated.rotate_left(2);
        assert_eq!(forward, resolve_draw("93A 29521", &rotated).unwrap());
    }

    #[test]
    fn resolution_is_deterministic() {
        let tickets = ticket_set(&["67B 29521", "22F 19521", "44C 12345"]);
        let first = resolve_draw("93A 29521", &tickets).unwrap();
        let second = resolve_draw("93A 29521", &tickets).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_winning_number_aborts_the_resolution() {
        let tickets = ticket_set(&["67B 29521"]);
        assert!(resolve_draw("93A29521", &tickets).is_err());
        assert!(resolve_draw("", &tickets).is_err());
    }

    #[test]
    fn lowercase_winning_number_is_normalized_before_matching() {
        let tickets = ticket_set(&["93A 29521"]);
        let resolution = resolve_draw("93a 29521", &tickets).unwrap();
        assert_eq!(resolution.counts.tier1, 1);
    }

    #[test]
    fn empty_ticket_set_resolves_to_zero_counts() {
        let resolution = resolve_draw("93A 29521", &[]).unwrap();
        assert!(resolution.outcomes.is_empty());
        assert_eq!(resolution.counts, TierCounts::default());
    }
}
