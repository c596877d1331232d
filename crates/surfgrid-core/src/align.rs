//! Zip-with-last-repetition alignment of batched inputs.
//!
//! Given sequences of lengths `L1..Ln`, alignment yields `max(Li)` tuples where
//! sequence `i` contributes `seq_i[min(p, Li - 1)]` at position `p`.

use crate::error::{Result, SurfError};

/// Number of aligned tuples for sequences with the given `(name, length)` pairs.
///
/// Fails if any sequence is empty or if no sequences are given.
pub fn aligned_count(lengths: &[(&str, usize)]) -> Result<usize> {
    if lengths.is_empty() {
        return Err(SurfError::EmptyInput("no input sequences to align".into()));
    }
    let mut count = 0;
    for &(name, len) in lengths {
        if len == 0 {
            return Err(SurfError::EmptyInput(format!(
                "input '{}' has no elements",
                name
            )));
        }
        count = count.max(len);
    }
    Ok(count)
}

/// Element at `position`, repeating the last element past the end.
///
/// # Panics
/// Panics if `items` is empty; callers establish non-emptiness with [`aligned_count`].
pub fn repeat_last<T>(items: &[T], position: usize) -> &T {
    &items[position.min(items.len() - 1)]
}

/// Align homogeneous sequences into `max(Li)` tuples.
pub fn zip_long_repeat<T: Clone>(seqs: &[&[T]]) -> Result<Vec<Vec<T>>> {
    let names: Vec<String> = (0..seqs.len()).map(|i| format!("#{}", i)).collect();
    let lengths: Vec<(&str, usize)> = names
        .iter()
        .zip(seqs)
        .map(|(name, seq)| (name.as_str(), seq.len()))
        .collect();
    let count = aligned_count(&lengths)?;

    Ok((0..count)
        .map(|p| seqs.iter().map(|seq| repeat_last(seq, p).clone()).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_repeats_last_element() {
        let a = [1, 2, 3];
        let b = [10];
        let c = [100, 200];
        let tuples = zip_long_repeat(&[&a[..], &b[..], &c[..]]).unwrap();
        assert_eq!(
            tuples,
            vec![vec![1, 10, 100], vec![2, 10, 200], vec![3, 10, 200]]
        );
    }

    #[test]
    fn test_equal_lengths_zip_plainly() {
        let a = [1, 2];
        let b = [3, 4];
        let tuples = zip_long_repeat(&[&a[..], &b[..]]).unwrap();
        assert_eq!(tuples, vec![vec![1, 3], vec![2, 4]]);
    }

    #[test]
    fn test_empty_sequence_fails() {
        let a = [1, 2];
        let b: [i32; 0] = [];
        let err = zip_long_repeat(&[&a[..], &b[..]]).unwrap_err();
        assert!(matches!(err, SurfError::EmptyInput(_)));
    }

    #[test]
    fn test_aligned_count_names_empty_input() {
        let err = aligned_count(&[("surfaces", 2), ("samples_u", 0)]).unwrap_err();
        assert!(err.to_string().contains("samples_u"));
    }

    #[test]
    fn test_aligned_count_no_inputs() {
        assert!(aligned_count(&[]).is_err());
    }

    #[test]
    fn test_repeat_last_past_end() {
        let items = [7, 8];
        assert_eq!(*repeat_last(&items, 0), 7);
        assert_eq!(*repeat_last(&items, 1), 8);
        assert_eq!(*repeat_last(&items, 5), 8);
    }
}
