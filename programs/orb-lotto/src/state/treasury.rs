use anchor_lang::prelude::*;

/// ---------------------------------------------------------------------------
/// Treasury
/// ---------------------------------------------------------------------------
///
/// Program-owned PDA that holds the lamports backing every open draw: sale
/// proceeds come in here, and prizes, refunds and the foundation/operations
/// shares are paid out of here.
#[account]
pub struct Treasury {
    /// Who controls configuration / share withdrawals.
    pub authority: Pubkey,

    /// PDA bump for deterministic re-derivation.
    pub bump: u8,

    // ─────────────────────────────
    // Accounting / stats
    // ─────────────────────────────

    /// Total lamports ever received from ticket sales
    /// (monotonic counter, for analytics / audit).
    pub total_in_lamports: u64,

    /// Total lamports ever paid out as prizes.
    pub total_prizes_paid: u64,

    /// Total lamports ever refunded for cancelled draws.
    pub total_refunds_paid: u64,

    /// Total lamports moved to the foundation vault.
    pub total_foundation_withdrawn: u64,

    /// Total lamports moved to the operations vault.
    pub total_operations_withdrawn: u64,

    // ─────────────────────────────
    // Control flags
    // ─────────────────────────────

    /// Versioning for future migrations.
    pub version: u8,

    /// Padding / reserved bytes for future use (config, extra flags).
    pub _reserved: [u8; 32],
}

impl Treasury {

    pub const SEED: &'static [u8] = b"treasury";
    pub const SIZE: usize =
        32 + // authority
            1  + // bump
            8  + // total_in_lamports
            8  + // total_prizes_paid
            8  + // total_refunds_paid
            8  + // total_foundation_withdrawn
            8  + // total_operations_withdrawn
            1  + // version
            32;  // reserved
    // When allocating:
    // space = 8 (discriminator) + Treasury::SIZE
}


#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AnchorSerialize;

    #[test]
    fn test_treasury_size() {
        // Construct a dummy instance to check Borsh serialization size
        let t = Treasury {
            authority: Pubkey::default(),
            bump: 0,
            total_in_lamports: 0,
            total_prizes_paid: 0,
            total_refunds_paid: 0,
            total_foundation_withdrawn: 0,
            total_operations_withdrawn: 0,
            version: 0,
            _reserved: [0u8; 32],
        };

        let bytes = t.try_to_vec().unwrap();

        assert_eq!(
            bytes.len(),
            Treasury::SIZE,
            "Treasury account size mismatch: expected {}, got {}",
            Treasury::SIZE,
            bytes.len()
        );
    }
}
