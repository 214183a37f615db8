use crate::models::Quality;
use crate::srs::round2;

/// Coins earned for one review: quality sets the base, card difficulty
/// scales it. A blackout (quality 0) pays nothing at any difficulty.
///
/// base = quality * 0.1, multiplier = 1 + (difficulty - 1) * 0.2,
/// rounded to 2 decimal places.
pub fn coins_earned(quality: Quality, difficulty_level: i64) -> f64 {
    let base = quality.value() as f64 * 0.1;
    let multiplier = 1.0 + (difficulty_level - 1) as f64 * 0.2;
    round2(base * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(raw: i64) -> Quality {
        Quality::new(raw).unwrap()
    }

    #[test]
    fn blackout_pays_nothing() {
        for difficulty in 1..=5 {
            assert_eq!(coins_earned(q(0), difficulty), 0.0);
        }
    }

    #[test]
    fn perfect_recall_fixtures() {
        assert_eq!(coins_earned(q(5), 1), 0.5);
        assert_eq!(coins_earned(q(5), 5), 0.9); // 0.5 * 1.8
    }

    #[test]
    fn monotonic_in_quality_and_difficulty() {
        for difficulty in 1..=5 {
            for grade in 1..=5 {
                assert!(coins_earned(q(grade), difficulty) >= coins_earned(q(grade - 1), difficulty));
            }
        }
        for grade in 0..=5 {
            for difficulty in 2..=5 {
                assert!(coins_earned(q(grade), difficulty) >= coins_earned(q(grade), difficulty - 1));
            }
        }
    }
}
