//! Candidate answer generation

use rand::Rng;

/// Build `count` unique values in `1..=max_value` containing `correct`,
/// sorted ascending for stable display.
///
/// `count` is clamped to the size of the range so sampling always terminates.
pub fn generate_options<R: Rng + ?Sized>(
    rng: &mut R,
    correct: u32,
    count: usize,
    max_value: u32,
) -> Vec<u32> {
    let max_value = max_value.max(1);
    debug_assert!((1..=max_value).contains(&correct), "correct value out of range");

    let range_size = max_value as usize;
    let count = if count > range_size {
        log::warn!("Requested {count} options from a range of {range_size}, clamping");
        range_size
    } else {
        count.max(1)
    };

    let mut options = Vec::with_capacity(count);
    options.push(correct);
    while options.len() < count {
        let candidate = rng.random_range(1..=max_value);
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    options.sort_unstable();
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_options_contain_correct_once() {
        let mut rng = Pcg32::seed_from_u64(7);
        for correct in 1..=9 {
            let opts = generate_options(&mut rng, correct, 5, 9);
            assert_eq!(opts.len(), 5);
            assert_eq!(opts.iter().filter(|&&v| v == correct).count(), 1);
            assert!(opts.windows(2).all(|w| w[0] < w[1]));
            assert!(opts.iter().all(|v| (1..=9).contains(v)));
        }
    }

    #[test]
    fn test_count_clamped_to_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        let opts = generate_options(&mut rng, 2, 10, 6);
        assert_eq!(opts, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_single_option() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(generate_options(&mut rng, 4, 1, 9), vec![4]);
    }
}
