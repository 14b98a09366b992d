/// Returns true if ticket sales are still open for a draw scheduled at
/// `scheduled_at`, given the configured pre-draw cutoff.
///
/// This prevents purchases racing the settlement worker: once the cutoff is
/// reached the ticket set for the draw is final.
pub fn is_sales_open(now: i64, scheduled_at: i64, cutoff_seconds: i64) -> bool {
    now < scheduled_at.saturating_sub(cutoff_seconds)
}

/// Returns true once the scheduled draw time has passed and settlement may
/// begin.
pub fn is_draw_due(now: i64, scheduled_at: i64) -> bool {
    now >= scheduled_at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sales_close_at_the_cutoff_boundary() {
        let scheduled = 1_000;
        assert!(is_sales_open(699, scheduled, 300));
        assert!(!is_sales_open(700, scheduled, 300));
        assert!(!is_sales_open(1_000, scheduled, 300));
    }

    #[test]
    fn zero_cutoff_allows_sales_until_the_draw() {
        assert!(is_sales_open(999, 1_000, 0));
        assert!(!is_sales_open(1_000, 1_000, 0));
    }

    #[test]
    fn draw_is_due_exactly_at_schedule() {
        assert!(!is_draw_due(999, 1_000));
        assert!(is_draw_due(1_000, 1_000));
        assert!(is_draw_due(1_001, 1_000));
    }
}
