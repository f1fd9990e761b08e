//! Flat 4x4 transform matrix as handed over by the host.

use std::fmt;

use bevy::math::Mat4;

use crate::constants::MATRIX_LEN;

/// A 4x4 transform stored as 16 floats.
///
/// The layout is column-major (`Mat4::to_cols_array`), so translation lives
/// at positions 12..=14. The values are treated as opaque data: nothing here
/// checks orthogonality or invertibility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformMatrix([f32; MATRIX_LEN]);

impl TransformMatrix {
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Build from a slice, rejecting anything that is not exactly 16 values long.
    #[allow(dead_code)]
    pub fn from_slice(values: &[f32]) -> Option<Self> {
        let array: [f32; MATRIX_LEN] = values.try_into().ok()?;
        Some(Self(array))
    }

    #[allow(dead_code)]
    pub fn as_array(&self) -> &[f32; MATRIX_LEN] {
        &self.0
    }

    /// Naive element-wise arithmetic mean of the given matrices.
    ///
    /// Each of the 16 positions is summed independently and divided by the
    /// number of matrices. This is not a geometric blend: averaging two
    /// rotations produces a non-orthogonal matrix, and that is what the host
    /// receives. Returns `None` for an empty input.
    pub fn mean<'a, I>(matrices: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a TransformMatrix>,
    {
        let mut sum = [0.0_f32; MATRIX_LEN];
        let mut count = 0_usize;

        for matrix in matrices {
            for (acc, value) in sum.iter_mut().zip(matrix.0.iter()) {
                *acc += value;
            }
            count += 1;
        }

        if count == 0 {
            return None;
        }

        let divisor = count as f32;
        for acc in sum.iter_mut() {
            *acc /= divisor;
        }
        Some(Self(sum))
    }
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f32; MATRIX_LEN]> for TransformMatrix {
    fn from(values: [f32; MATRIX_LEN]) -> Self {
        Self(values)
    }
}

impl From<Mat4> for TransformMatrix {
    fn from(matrix: Mat4) -> Self {
        Self(matrix.to_cols_array())
    }
}

impl From<TransformMatrix> for Mat4 {
    fn from(matrix: TransformMatrix) -> Self {
        Mat4::from_cols_array(&matrix.0)
    }
}

/// List-literal form used by the clipboard list, e.g. `[1.0, 0.0, ...]`.
impl fmt::Display for TransformMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::*;

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert!(TransformMatrix::from_slice(&[0.0; 15]).is_none());
        assert!(TransformMatrix::from_slice(&[0.0; 17]).is_none());
        assert!(TransformMatrix::from_slice(&[]).is_none());
        assert_eq!(
            TransformMatrix::from_slice(TransformMatrix::IDENTITY.as_array()),
            Some(TransformMatrix::IDENTITY)
        );
    }

    #[test]
    fn test_mean_of_nothing_is_none() {
        assert!(TransformMatrix::mean(std::iter::empty()).is_none());
    }

    #[test]
    fn test_mean_of_identical_identities() {
        let matrices = [TransformMatrix::IDENTITY, TransformMatrix::IDENTITY];
        assert_eq!(
            TransformMatrix::mean(&matrices),
            Some(TransformMatrix::IDENTITY)
        );
    }

    #[test]
    fn test_mean_is_per_position() {
        let mut a = [0.0; MATRIX_LEN];
        a[0] = 2.0;
        let mut b = [0.0; MATRIX_LEN];
        b[0] = 4.0;

        let matrices = [TransformMatrix::from(a), TransformMatrix::from(b)];
        let mean = TransformMatrix::mean(&matrices).unwrap();

        assert_eq!(mean.as_array()[0], 3.0);
        assert!(mean.as_array()[1..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_mean_of_rotations_is_not_renormalized() {
        // 0 and 90 degrees about Z: the naive mean shrinks the basis vectors
        let a = TransformMatrix::from(Mat4::IDENTITY);
        let b = TransformMatrix::from(Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2));

        let mean = TransformMatrix::mean(&[a, b]).unwrap();
        let x_axis = Mat4::from(mean).x_axis.truncate();

        assert!((x_axis.length() - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_translation_layout_matches_mat4() {
        let matrix = TransformMatrix::from(Mat4::from_translation(Vec3::new(5.0, 6.0, 7.0)));
        assert_eq!(&matrix.as_array()[12..15], &[5.0, 6.0, 7.0]);
        assert_eq!(
            Mat4::from(matrix),
            Mat4::from_translation(Vec3::new(5.0, 6.0, 7.0))
        );
    }

    #[test]
    fn test_display_is_list_literal() {
        let text = TransformMatrix::IDENTITY.to_string();
        assert!(text.starts_with("[1.0, 0.0, 0.0, 0.0, 0.0, 1.0"));
        assert!(text.ends_with("0.0, 1.0]"));
        assert_eq!(text.matches(", ").count(), MATRIX_LEN - 1);
    }
}
