/// Daily-streak transition, evaluated once per submitted review *before* that
/// review's event is appended to history. Running the check first is what
/// makes the counter idempotent per day: the second review of a day sees
/// `reviewed_earlier_today` and leaves the streak alone.
///
/// Any review qualifies, regardless of grade.
pub fn advance(streak_days: i64, reviewed_earlier_today: bool, reviewed_yesterday: bool) -> i64 {
    if reviewed_earlier_today {
        // Today already counted.
        streak_days
    } else if reviewed_yesterday {
        streak_days + 1
    } else {
        // Either the streak was already 0 or a gap of two or more days broke
        // it; both collapse to "reset, then count today".
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_review_ever_starts_a_streak() {
        assert_eq!(advance(0, false, false), 1);
    }

    #[test]
    fn consecutive_days_increment() {
        assert_eq!(advance(1, false, true), 2);
        assert_eq!(advance(41, false, true), 42);
    }

    #[test]
    fn second_review_same_day_is_a_no_op() {
        assert_eq!(advance(3, true, false), 3);
        assert_eq!(advance(3, true, true), 3);
    }

    #[test]
    fn missing_a_day_resets_before_counting_today() {
        // Last review two days ago: the streak breaks, but today's review
        // still starts a new one.
        assert_eq!(advance(7, false, false), 1);
    }
}
