use anchor_lang::prelude::*;
use crate::constants::RECENT_TICKETS_CAP;

#[account]
pub struct PlayerProfile {
    /// The owner/player wallet
    pub player: Pubkey, // 32

    /// PDA bump
    pub bump: u8, // 1

    // ─────────────────────────────
    // Aggregate stats
    // ─────────────────────────────
    pub total_tickets: u32,            // 4
    pub draws_entered: u32,            // 4
    pub total_lamports_spent: u64,     // 8
    pub total_lamports_won: u64,       // 8
    pub total_wins: u32,               // 4
    pub first_played_at: i64,          // 8
    pub last_played_at: i64,           // 8

    // ─────────────────────────────
    // Recent tickets ring buffer
    // ─────────────────────────────
    /// Circular buffer of the last N SoldTicket pubkeys
    pub recent_tickets: [Pubkey; RECENT_TICKETS_CAP], // 32 * 40 = 1280

    /// Number of valid entries currently stored (0~RECENT_TICKETS_CAP)
    pub recent_tickets_len: u16, // 2

    /// Next index to write (wraps around 0..RECENT_TICKETS_CAP-1)
    pub recent_tickets_head: u16, // 2

    /// Prevent closing while a draw the player entered is still open.
    pub locked_until_ts: i64, // 8

    /// Versioning for future migrations.
    pub version: u8,

    // ─────────────────────────────
    // Reserved for future upgrades
    // ─────────────────────────────
    pub _reserved: [u8; 16],
}

impl PlayerProfile {
    pub const SEED_PREFIX: &'static [u8] = b"profile";

    /// Total serialized size (not including the 8-byte discriminator)
    pub const SIZE: usize =
        32  // player
            + 1   // bump
            + 4   // total_tickets
            + 4   // draws_entered
            + 8   // total_lamports_spent
            + 8   // total_lamports_won
            + 4   // total_wins
            + 8   // first_played_at
            + 8   // last_played_at
            + (32 * RECENT_TICKETS_CAP) // recent_tickets
            + 2   // recent_tickets_len
            + 2   // recent_tickets_head
            + 8   // locked_until_ts
            + 1   // version
            + 16; // reserved

    /// Push a ticket pubkey into the ring buffer (keeps only the last N)
    pub fn push_recent_ticket(&mut self, ticket: Pubkey) {
        let head = self.recent_tickets_head as usize;
        self.recent_tickets[head] = ticket;

        let next = (head + 1) % RECENT_TICKETS_CAP;
        self.recent_tickets_head = next as u16;

        if (self.recent_tickets_len as usize) < RECENT_TICKETS_CAP {
            self.recent_tickets_len += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    fn empty_profile() -> PlayerProfile {
        PlayerProfile {
            player: Pubkey::default(),
            bump: 0,
            total_tickets: 0,
            draws_entered: 0,
            total_lamports_spent: 0,
            total_lamports_won: 0,
            total_wins: 0,
            first_played_at: 0,
            last_played_at: 0,
            recent_tickets: [Pubkey::default(); RECENT_TICKETS_CAP],
            recent_tickets_len: 0,
            recent_tickets_head: 0,
            locked_until_ts: 0,
            version: 0,
            _reserved: [0u8; 16],
        }
    }

    #[test]
    fn profile_size_matches_serialization() {
        let bytes = empty_profile().try_to_vec().unwrap();
        assert_eq!(bytes.len(), PlayerProfile::SIZE);
    }

    #[test]
    fn ring_buffer_wraps_and_keeps_the_newest() {
        let mut profile = empty_profile();
        let mut last = Pubkey::default();
        for _ in 0..RECENT_TICKETS_CAP + 3 {
            last = Pubkey::new_unique();
            profile.push_recent_ticket(last);
        }

        assert_eq!(profile.recent_tickets_len as usize, RECENT_TICKETS_CAP);
        let newest = (profile.recent_tickets_head as usize + RECENT_TICKETS_CAP - 1)
            % RECENT_TICKETS_CAP;
        assert_eq!(profile.recent_tickets[newest], last);
    }
}
