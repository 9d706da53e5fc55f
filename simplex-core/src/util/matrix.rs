//! Dense row-major matrix helpers.
//!
//! Matrices are `Vec<Vec<f64>>` with one inner vector per row. Nothing here
//! checks that rows share a length; callers own that invariant.

/// Transpose a rectangular matrix.
///
/// An empty matrix stays empty, and a matrix with a single empty row stays a
/// single empty row.
pub fn transpose(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let Some(first) = matrix.first() else {
        return Vec::new();
    };
    let cols = first.len();
    if cols == 0 {
        return vec![Vec::new()];
    }

    (0..cols)
        .map(|j| matrix.iter().map(|row| row[j]).collect())
        .collect()
}

/// Multiply every entry of `v` by `factor`.
#[inline]
pub fn scale_in_place(factor: f64, v: &mut [f64]) {
    for x in v.iter_mut() {
        *x *= factor;
    }
}

/// Append zeros until `v` has at least `len` entries.
#[inline]
pub fn pad_with_zeros(v: &mut Vec<f64>, len: usize) {
    if v.len() < len {
        v.resize(len, 0.0);
    }
}

/// Inner product over the shorter of the two slices.
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_rectangular() {
        let m = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]];
        assert_eq!(
            transpose(&m),
            vec![vec![1.0, 3.0, 5.0], vec![2.0, 4.0, 6.0]]
        );
    }

    #[test]
    fn test_transpose_degenerate() {
        assert_eq!(transpose(&[]), Vec::<Vec<f64>>::new());
        assert_eq!(transpose(&[Vec::new()]), vec![Vec::<f64>::new()]);
    }

    #[test]
    fn test_transpose_tableau() {
        let m = vec![
            vec![0.0, 4.0, 5.0, 6.0, 0.0, 0.0, 0.0],
            vec![11.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0],
            vec![5.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0],
            vec![0.0, -1.0, -1.0, 1.0, 0.0, 0.0, 0.0],
            vec![35.0, 12.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        ];
        let expected = vec![
            vec![0.0, 11.0, 5.0, 0.0, 35.0],
            vec![4.0, 1.0, 1.0, -1.0, 12.0],
            vec![5.0, 1.0, -1.0, -1.0, 0.0],
            vec![6.0, 0.0, 0.0, 1.0, 0.0],
            vec![0.0, 1.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0, 1.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0],
        ];
        assert_eq!(transpose(&m), expected);
        assert_eq!(transpose(&expected), m);
    }

    #[test]
    fn test_scale_and_pad() {
        let mut v = vec![1.0, -2.0];
        scale_in_place(-3.0, &mut v);
        assert_eq!(v, vec![-3.0, 6.0]);

        pad_with_zeros(&mut v, 4);
        assert_eq!(v, vec![-3.0, 6.0, 0.0, 0.0]);

        // Never truncates
        pad_with_zeros(&mut v, 1);
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0]), 14.0);
        assert_eq!(dot(&[], &[1.0]), 0.0);
    }
}
