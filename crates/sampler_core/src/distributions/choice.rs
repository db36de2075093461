//! Uniform choice from a non-empty slice.

use crate::error::{Result, SamplerError};
use crate::rng::UniformSource;

/// Returns a uniformly chosen element of `collection`.
///
/// Consumes one uniform draw. Index `floor(U · len)` is clamped to the last
/// element, so every element has probability `1 / len`.
///
/// # Errors
///
/// Returns `SamplerError::InvalidParameter` if `collection` is empty. No draw
/// is consumed in that case.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{uniform_choice, SamplerRng};
///
/// let mut rng = SamplerRng::from_seed(0);
/// assert_eq!(uniform_choice(&['a'], &mut rng).unwrap(), &'a');
///
/// let empty: [char; 0] = [];
/// assert!(uniform_choice(&empty, &mut rng).is_err());
/// ```
pub fn uniform_choice<'a, T, S: UniformSource + ?Sized>(
    collection: &'a [T],
    source: &mut S,
) -> Result<&'a T> {
    if collection.is_empty() {
        return Err(SamplerError::invalid("collection", "must not be empty"));
    }

    let len = collection.len();
    let index = ((source.next_uniform() * len as f64) as usize).min(len - 1);
    Ok(&collection[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ReplaySource, SamplerRng};

    #[test]
    fn test_singleton_always_returned() {
        let mut rng = SamplerRng::from_seed(1);
        for _ in 0..100 {
            assert_eq!(uniform_choice(&["a"], &mut rng).unwrap(), &"a");
        }
    }

    #[test]
    fn test_empty_is_rejected() {
        let mut source = ReplaySource::new(vec![]);
        let empty: Vec<u32> = Vec::new();
        match uniform_choice(&empty, &mut source) {
            Err(SamplerError::InvalidParameter { name, .. }) => assert_eq!(name, "collection"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_index_mapping() {
        let items = [10, 20, 30, 40];
        let mut source = ReplaySource::new(vec![0.0, 0.24, 0.25, 0.74, 0.999_999]);
        let picks: Vec<i32> = (0..5)
            .map(|_| *uniform_choice(&items, &mut source).unwrap())
            .collect();
        assert_eq!(picks, vec![10, 10, 20, 30, 40]);
    }

    #[test]
    fn test_unit_draw_is_clamped() {
        let items = ['x', 'y', 'z'];
        let mut source = ReplaySource::new(vec![1.0]);
        assert_eq!(uniform_choice(&items, &mut source).unwrap(), &'z');
    }

    #[test]
    fn test_returns_element_unchanged() {
        let items = vec![String::from("alpha"), String::from("beta")];
        let mut source = ReplaySource::new(vec![0.9]);
        let picked = uniform_choice(&items, &mut source).unwrap();
        assert!(std::ptr::eq(picked, &items[1]));
    }

    #[test]
    fn test_frequencies_are_uniform() {
        let items = [0usize, 1, 2, 3, 4];
        let mut counts = [0usize; 5];
        let mut rng = SamplerRng::from_seed(55);
        let n = 100_000;
        for _ in 0..n {
            counts[*uniform_choice(&items, &mut rng).unwrap()] += 1;
        }
        for count in counts {
            let share = count as f64 / n as f64;
            assert!((share - 0.2).abs() < 0.01, "share = {}", share);
        }
    }
}
