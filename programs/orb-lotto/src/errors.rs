use anchor_lang::prelude::*;

#[error_code]
pub enum OrbLottoErrorCode {
    // ─────────────────────────────
    // Setup and configuration
    // ─────────────────────────────
    DrawMismatch,
    TreasuryMismatch,
    InvalidAuthorityTarget,
    InvalidVaultTarget,
    AuthorityCannotEqualVault,
    InvalidRateConfig,
    InvalidCutoff,
    InvalidSchedule,

    #[msg("Unknown ticket type")]
    UnknownTicketType,

    #[msg("Inactive ticket type")]
    InactiveTicketType,

    InvalidTicketTypeFlag,
    InvalidTicketPrice,

    // ─────────────────────────────
    // General / Access Control
    // ─────────────────────────────
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid input")]
    InvalidInput,

    // ─────────────────────────────
    // Ticket number codec
    // ─────────────────────────────
    #[msg("Invalid ticket number format")]
    InvalidTicketFormat,

    #[msg("Invalid winning number")]
    InvalidWinningNumber,

    InvalidSuffixLength,

    // ─────────────────────────────
    // Sales Validation
    // ─────────────────────────────
    #[msg("Sales closed")]
    SalesClosed,

    #[msg("Sales paused")]
    SalesPaused,

    #[msg("Ticket cap reached")]
    TicketCapReached,

    InvalidTicketIndex,
    DrawNotPending,
    NoTicketsSold,

    // ─────────────────────────────
    // Draw / Settlement Lifecycle
    // ─────────────────────────────
    DrawNotDue,
    DrawNotCompleted,
    DrawNotCancelled,
    DrawAlreadySettled,
    SettlementNotInProcessingState,

    #[msg("Winner counts exceed tickets sold")]
    TooManyWinners,

    #[msg("Tier counts do not match on-chain resolution")]
    TierCountMismatch,

    IncompleteTicketSet,
    InvalidPotBreakdown,

    #[msg("Tier payouts exceed the prize pool")]
    PoolExhausted,

    #[msg("Pool plus foundation exceed gross sales")]
    NegativeResidual,

    InsufficientTreasuryBalance,

    // ─────────────────────────────
    // Claims / Refunds
    // ─────────────────────────────
    #[msg("Claims paused")]
    ClaimsPaused,

    #[msg("Not a winning ticket")]
    NotAWinner,

    #[msg("Already claimed")]
    AlreadyClaimed,

    AlreadyRecorded,

    #[msg("Invalid claim amount")]
    InvalidClaimAmount,

    InsufficientPrizePool,
    ClaimNotAllowed,
    TicketNotSettled,
    AssertInvariantFailed,

    // ─────────────────────────────
    // Account closing
    // ─────────────────────────────
    TicketStillLive,
    ProfileLockedActiveDraw,
}
