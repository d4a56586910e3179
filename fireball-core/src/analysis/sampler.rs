use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::AnalyzerError;
use crate::models::{Combination, Pool};

/// Upfront allocation cap; larger requests grow the vector as they go.
const MAX_PREALLOC: usize = 1024;

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// `count` combinations, each built from 3 main digits drawn with
/// replacement from `digit_pool` and 1 fireball from `fireball_pool`.
/// Duplicates are allowed.
pub fn generate_combinations<R: Rng + ?Sized>(
    digit_pool: &[u8],
    fireball_pool: &[u8],
    count: usize,
    rng: &mut R,
) -> Result<Vec<Combination>, AnalyzerError> {
    check_pool(digit_pool, Pool::Main)?;
    check_pool(fireball_pool, Pool::Fireball)?;

    let mut combinations = Vec::with_capacity(count.min(MAX_PREALLOC));
    for _ in 0..count {
        let main: String = (0..Pool::Main.pick_count())
            .map(|_| digit_char(pick(digit_pool, rng)))
            .collect();
        let fireball = digit_char(pick(fireball_pool, rng)).to_string();
        combinations.push(Combination { main, fireball });
    }

    log::debug!(
        "generated {} combinations from pools {:?} / {:?}",
        combinations.len(),
        digit_pool,
        fireball_pool
    );
    Ok(combinations)
}

fn check_pool(pool: &[u8], kind: Pool) -> Result<(), AnalyzerError> {
    if pool.is_empty() {
        return Err(AnalyzerError::EmptyPool(kind));
    }
    let field = match kind {
        Pool::Main => "main pool digit",
        Pool::Fireball => "fireball pool digit",
    };
    if let Some(bad) = pool.iter().find(|&&d| d > 9) {
        return Err(AnalyzerError::invalid(field, bad.to_string(), "expected a digit 0-9"));
    }
    Ok(())
}

fn pick<R: Rng + ?Sized>(pool: &[u8], rng: &mut R) -> u8 {
    pool[rng.random_range(0..pool.len())]
}

fn digit_char(d: u8) -> char {
    char::from(b'0' + d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_count_and_membership() {
        let mut rng = seeded_rng(Some(7));
        let combos = generate_combinations(&[2, 7, 8], &[3], 5, &mut rng).unwrap();

        assert_eq!(combos.len(), 5);
        for c in &combos {
            assert_eq!(c.main.len(), 3);
            assert!(c.main.chars().all(|ch| matches!(ch, '2' | '7' | '8')));
            assert_eq!(c.fireball, "3");
        }
    }

    #[test]
    fn test_single_digit_pool() {
        let mut rng = seeded_rng(Some(1));
        let combos = generate_combinations(&[0], &[0], 3, &mut rng).unwrap();
        assert!(combos.iter().all(|c| c.main == "000" && c.fireball == "0"));
    }

    #[test]
    fn test_zero_count() {
        let mut rng = seeded_rng(Some(1));
        assert!(generate_combinations(&[1], &[1], 0, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn test_count_above_prealloc_cap() {
        let mut rng = seeded_rng(Some(2));
        let combos = generate_combinations(&[4], &[2], MAX_PREALLOC + 3, &mut rng).unwrap();
        assert_eq!(combos.len(), MAX_PREALLOC + 3);
    }

    #[test]
    fn test_huge_count_with_empty_pool_fails_before_allocating() {
        let mut rng = seeded_rng(Some(2));
        let err = generate_combinations(&[1], &[], usize::MAX, &mut rng).unwrap_err();
        assert_eq!(err, AnalyzerError::EmptyPool(Pool::Fireball));
    }

    #[test]
    fn test_empty_main_pool() {
        let mut rng = seeded_rng(Some(1));
        let err = generate_combinations(&[], &[3], 5, &mut rng).unwrap_err();
        assert_eq!(err, AnalyzerError::EmptyPool(Pool::Main));
    }

    #[test]
    fn test_empty_fireball_pool() {
        let mut rng = seeded_rng(Some(1));
        let err = generate_combinations(&[1, 2], &[], 5, &mut rng).unwrap_err();
        assert_eq!(err, AnalyzerError::EmptyPool(Pool::Fireball));
    }

    #[test]
    fn test_non_digit_pool_rejected() {
        let mut rng = seeded_rng(Some(1));
        let err = generate_combinations(&[1, 12], &[3], 5, &mut rng).unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidInput { .. }));
    }

    #[test]
    fn test_seed_reproducible() {
        let a = generate_combinations(&[1, 4, 6, 9], &[0, 5], 5, &mut seeded_rng(Some(42))).unwrap();
        let b = generate_combinations(&[1, 4, 6, 9], &[0, 5], 5, &mut seeded_rng(Some(42))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseeded_rng_works() {
        let combos = generate_combinations(&[5], &[6], 2, &mut seeded_rng(None)).unwrap();
        assert_eq!(combos.len(), 2);
    }
}
