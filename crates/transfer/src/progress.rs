/// Upload percentage at which the phase label switches to [`Phase::Summarizing`].
///
/// Purely cosmetic: the service reports nothing about its internal stages, so
/// the label is a guess based on how much of the file has been sent.
pub const SUMMARIZING_THRESHOLD: u8 = 87;

/// Coarse label describing what the user is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Processing,
    Summarizing,
}

impl Phase {
    /// Derives the phase from an upload percentage.
    pub fn from_percent(percent: u8) -> Self {
        if percent < SUMMARIZING_THRESHOLD {
            Self::Processing
        } else {
            Self::Summarizing
        }
    }

    /// Human-readable message for this phase.
    pub fn message(self) -> &'static str {
        match self {
            Self::Processing => "Processing document...",
            Self::Summarizing => "Working on summary...",
        }
    }
}

/// Returns the phase message for an upload percentage.
pub fn phase_message(percent: u8) -> &'static str {
    Phase::from_percent(percent).message()
}

/// Percentage of chunks sent, rounded half-up to a whole number.
///
/// Returns 0 for an empty plan and never exceeds 100.
pub fn progress_percent(uploaded_chunks: u32, total_chunks: u32) -> u8 {
    if total_chunks == 0 {
        return 0;
    }
    let uploaded = u64::from(uploaded_chunks.min(total_chunks));
    let total = u64::from(total_chunks);
    // round(uploaded / total * 100) in integer arithmetic.
    ((uploaded * 200 + total) / (2 * total)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_boundary() {
        assert_eq!(phase_message(0), "Processing document...");
        assert_eq!(phase_message(86), "Processing document...");
        assert_eq!(phase_message(87), "Working on summary...");
        assert_eq!(phase_message(100), "Working on summary...");
        assert_eq!(Phase::from_percent(86), Phase::Processing);
        assert_eq!(Phase::from_percent(87), Phase::Summarizing);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(1, 8), 13);
        assert_eq!(progress_percent(1, 200), 1);
        assert_eq!(progress_percent(1, 201), 0);
    }

    #[test]
    fn percent_endpoints() {
        assert_eq!(progress_percent(0, 5), 0);
        assert_eq!(progress_percent(5, 5), 100);
        assert_eq!(progress_percent(1, 1), 100);
        assert_eq!(progress_percent(0, 0), 0);
    }

    #[test]
    fn percent_is_capped() {
        assert_eq!(progress_percent(7, 5), 100);
    }

    #[test]
    fn percent_is_monotonic() {
        for total in 1..=300u32 {
            let mut last = 0;
            for done in 1..=total {
                let p = progress_percent(done, total);
                assert!(p >= last, "{done}/{total}: {last} -> {p}");
                last = p;
            }
            assert_eq!(last, 100);
        }
    }

    #[test]
    fn percent_large_plans_do_not_overflow() {
        assert_eq!(progress_percent(u32::MAX, u32::MAX), 100);
        assert_eq!(progress_percent(u32::MAX / 2, u32::MAX), 50);
    }
}
