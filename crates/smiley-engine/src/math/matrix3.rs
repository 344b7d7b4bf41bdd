use core::ops::Mul;

use super::{ApproxEq, MathError, Vector2};

/// 3×3 homogeneous transform for 2D points.
///
/// `elements` is the flat nine-float array handed to the shader. Read as rows
/// of three, translation sits on the last row:
///
/// ```text
/// [ e0 e1 e2 ]     scale        translation     rotation
/// [ e3 e4 e5 ]     sx  0  0     1  0  0          c  s  0
/// [ e6 e7 e8 ]     0  sy  0     0  1  0         -s  c  0
///                  0   0  1     tx ty 1          0  0  1
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3 {
    pub elements: [f32; 9],
}

impl Matrix3 {
    pub const IDENTITY: Matrix3 = Matrix3 {
        elements: [
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ],
    };

    #[inline]
    pub const fn new(elements: [f32; 9]) -> Self {
        Self { elements }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Builds a matrix from exactly nine elements.
    pub fn from_slice(v: &[f32]) -> Result<Self, MathError> {
        let elements: [f32; 9] = v
            .try_into()
            .map_err(|_| MathError::InvalidDimension { expected: 9, actual: v.len() })?;
        Ok(Self { elements })
    }

    pub fn scale(v: Vector2) -> Self {
        Self::new([
            v.x, 0.0, 0.0,
            0.0, v.y, 0.0,
            0.0, 0.0, 1.0,
        ])
    }

    pub fn translation(v: Vector2) -> Self {
        Self::new([
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            v.x, v.y, 1.0,
        ])
    }

    /// Rotation by `angle_radians`, counter-clockwise in a y-up frame.
    pub fn rotation(angle_radians: f32) -> Self {
        let c = angle_radians.cos();
        let s = angle_radians.sin();

        Self::new([
            c,   s,   0.0,
            -s,  c,   0.0,
            0.0, 0.0, 1.0,
        ])
    }

    /// Composes two transforms: the result applies `b` first, then `a`.
    ///
    /// Element-wise, `out[r*3+c] = Σk b[r*3+k] * a[k*3+c]`.
    pub fn multiply(a: &Matrix3, b: &Matrix3) -> Matrix3 {
        let ae = &a.elements;
        let be = &b.elements;

        let (a00, a01, a02) = (ae[0], ae[1], ae[2]);
        let (a10, a11, a12) = (ae[3], ae[4], ae[5]);
        let (a20, a21, a22) = (ae[6], ae[7], ae[8]);

        let (b00, b01, b02) = (be[0], be[1], be[2]);
        let (b10, b11, b12) = (be[3], be[4], be[5]);
        let (b20, b21, b22) = (be[6], be[7], be[8]);

        Matrix3::new([
            a00 * b00 + a10 * b01 + a20 * b02,
            a01 * b00 + a11 * b01 + a21 * b02,
            a02 * b00 + a12 * b01 + a22 * b02,

            a00 * b10 + a10 * b11 + a20 * b12,
            a01 * b10 + a11 * b11 + a21 * b12,
            a02 * b10 + a12 * b11 + a22 * b12,

            a00 * b20 + a10 * b21 + a20 * b22,
            a01 * b20 + a11 * b21 + a21 * b22,
            a02 * b20 + a12 * b21 + a22 * b22,
        ])
    }

    /// Applies the transform to the point `(p.x, p.y, 1)` the same way the
    /// vertex shader does.
    pub fn transform_point(&self, p: Vector2) -> Vector2 {
        let e = &self.elements;
        Vector2::new(
            e[0] * p.x + e[3] * p.y + e[6],
            e[1] * p.x + e[4] * p.y + e[7],
        )
    }

    /// WGSL `mat3x3<f32>` upload form: three 3-vectors each padded to 16 bytes.
    pub fn to_padded_columns(&self) -> [[f32; 4]; 3] {
        let e = &self.elements;

        [
            [e[0], e[1], e[2], 0.0],
            [e[3], e[4], e[5], 0.0],
            [e[6], e[7], e[8], 0.0],
        ]
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;
    #[inline]
    fn mul(self, rhs: Matrix3) -> Matrix3 {
        Matrix3::multiply(&self, &rhs)
    }
}

impl ApproxEq for Matrix3 {
    fn approx_eq(&self, other: &Self, tol: f32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() <= tol)
    }
}

/// Dimension-checked multiply over raw element slices.
///
/// Fails with [`MathError::InvalidDimension`] unless both inputs have nine elements.
pub fn multiply_slices(a: &[f32], b: &[f32]) -> Result<Matrix3, MathError> {
    let a = Matrix3::from_slice(a)?;
    let b = Matrix3::from_slice(b)?;
    Ok(Matrix3::multiply(&a, &b))
}
