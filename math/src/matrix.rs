use super::{dot, vector::fmt_components, Vec2, Vec3, Vec4};
use core::{
    fmt,
    ops::{Add, Div, Index, IndexMut, Mul, Sub},
};

macro_rules! impl_mat {
    ($(#[$meta:meta])* $mat:ident, $vec:ident, $n:literal, $len:literal, $($m:ident),+) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq)]
        pub struct $mat {
            /// Row-major: element `(r, c)` is `elements[r * N + c]`.
            pub elements: [f32; $len],
        }

        impl $mat {
            pub const ZERO: Self = Self {
                elements: [0.0; $len],
            };

            /// Creates a matrix from all of its elements in row-major order.
            #[inline]
            #[allow(clippy::too_many_arguments)]
            pub const fn new($($m: f32),+) -> Self {
                Self {
                    elements: [$($m),+],
                }
            }

            #[inline]
            pub const fn from_rows_array(elements: [f32; $len]) -> Self {
                Self { elements }
            }

            #[inline]
            pub fn to_rows_array(self) -> [f32; $len] {
                self.elements
            }

            pub fn from_rows(rows: [$vec; $n]) -> Self {
                let mut mat = Self::ZERO;
                for (r, row) in rows.iter().enumerate() {
                    mat.elements[r * $n..(r + 1) * $n].copy_from_slice(&row.to_array());
                }
                mat
            }

            #[inline]
            pub fn identity() -> Self {
                Self::IDENTITY
            }

            #[inline]
            pub fn row(&self, index: usize) -> $vec {
                $vec::from(self.row_array(index))
            }

            #[inline]
            pub fn column(&self, index: usize) -> $vec {
                $vec::from(self.column_array(index))
            }

            pub fn transpose(&self) -> Self {
                let mut mat = Self::ZERO;
                for i in 0..$n {
                    for j in 0..$n {
                        mat.elements[j * $n + i] = self.elements[i * $n + j];
                    }
                }
                mat
            }

            /// Divides every element by `rhs`, or returns `None` when `rhs` is
            /// zero. The `/` operator follows IEEE-754 division instead.
            #[allow(clippy::float_cmp)]
            pub fn checked_div(self, rhs: f32) -> Option<Self> {
                if rhs == 0.0 {
                    None
                } else {
                    Some(self / rhs)
                }
            }

            #[inline]
            pub fn is_finite(&self) -> bool {
                self.elements.iter().all(|e| e.is_finite())
            }

            #[inline]
            pub fn is_nan(&self) -> bool {
                self.elements.iter().any(|e| e.is_nan())
            }

            fn row_array(&self, index: usize) -> [f32; $n] {
                assert!(index < $n, "row {} out of range for {}", index, stringify!($mat));
                let mut row = [0.0; $n];
                row.copy_from_slice(&self.elements[index * $n..(index + 1) * $n]);
                row
            }

            fn column_array(&self, index: usize) -> [f32; $n] {
                assert!(index < $n, "column {} out of range for {}", index, stringify!($mat));
                let mut column = [0.0; $n];
                for (r, e) in column.iter_mut().enumerate() {
                    *e = self.elements[r * $n + index];
                }
                column
            }

            #[inline]
            fn map(self, f: impl Fn(f32) -> f32) -> Self {
                let mut mat = self;
                for e in mat.elements.iter_mut() {
                    *e = f(*e);
                }
                mat
            }

            #[inline]
            fn zip_map(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let mut mat = self;
                for (e, &r) in mat.elements.iter_mut().zip(rhs.elements.iter()) {
                    *e = f(*e, r);
                }
                mat
            }
        }

        impl From<[f32; $len]> for $mat {
            #[inline]
            fn from(elements: [f32; $len]) -> Self {
                Self::from_rows_array(elements)
            }
        }

        impl From<$mat> for [f32; $len] {
            #[inline]
            fn from(m: $mat) -> Self {
                m.to_rows_array()
            }
        }

        impl Index<(usize, usize)> for $mat {
            type Output = f32;
            #[inline]
            fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
                assert!(row < $n && col < $n, "({}, {}) out of range for {}", row, col, stringify!($mat));
                &self.elements[row * $n + col]
            }
        }

        impl IndexMut<(usize, usize)> for $mat {
            #[inline]
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
                assert!(row < $n && col < $n, "({}, {}) out of range for {}", row, col, stringify!($mat));
                &mut self.elements[row * $n + col]
            }
        }

        impl Add<$mat> for $mat {
            type Output = $mat;
            #[inline]
            fn add(self, rhs: $mat) -> Self::Output {
                self.zip_map(rhs, |a, b| a + b)
            }
        }

        impl Sub<$mat> for $mat {
            type Output = $mat;
            #[inline]
            fn sub(self, rhs: $mat) -> Self::Output {
                self.zip_map(rhs, |a, b| a - b)
            }
        }

        impl Add<f32> for $mat {
            type Output = $mat;
            #[inline]
            fn add(self, rhs: f32) -> Self::Output {
                self.map(|e| e + rhs)
            }
        }

        impl Sub<f32> for $mat {
            type Output = $mat;
            #[inline]
            fn sub(self, rhs: f32) -> Self::Output {
                self.map(|e| e - rhs)
            }
        }

        impl Mul<f32> for $mat {
            type Output = $mat;
            #[inline]
            fn mul(self, rhs: f32) -> Self::Output {
                self.map(|e| e * rhs)
            }
        }

        impl Div<f32> for $mat {
            type Output = $mat;
            #[inline]
            fn div(self, rhs: f32) -> Self::Output {
                self.map(|e| e / rhs)
            }
        }

        impl Mul<$vec> for $mat {
            type Output = $vec;
            #[inline]
            fn mul(self, rhs: $vec) -> Self::Output {
                let v = rhs.to_array();
                let mut tmp = [0.0; $n];
                for (r, e) in tmp.iter_mut().enumerate() {
                    *e = dot(&self.row_array(r), &v);
                }
                $vec::from(tmp)
            }
        }

        impl Mul<$mat> for $mat {
            type Output = $mat;
            #[inline]
            fn mul(self, rhs: $mat) -> Self::Output {
                let rhs_transpose = rhs.transpose();

                let mut tmp = Self::ZERO;
                for r in 0..$n {
                    for c in 0..$n {
                        tmp.elements[r * $n + c] =
                            dot(&self.row_array(r), &rhs_transpose.row_array(c));
                    }
                }
                tmp
            }
        }

        impl fmt::Display for $mat {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for r in 0..$n {
                    if r != 0 {
                        writeln!(f)?;
                    }
                    fmt_components(f, &self.row_array(r))?;
                }
                Ok(())
            }
        }
    };
}

impl_mat!(
    /// A 2x2 matrix stored in row-major order.
    Mat2, Vec2, 2, 4,
    m00, m01,
    m10, m11
);

impl_mat!(
    /// A 3x3 matrix stored in row-major order.
    Mat3, Vec3, 3, 9,
    m00, m01, m02,
    m10, m11, m12,
    m20, m21, m22
);

impl_mat!(
    /// A 4x4 matrix stored in row-major order.
    Mat4, Vec4, 4, 16,
    m00, m01, m02, m03,
    m10, m11, m12, m13,
    m20, m21, m22, m23,
    m30, m31, m32, m33
);

impl Mat2 {
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0,
        0.0, 1.0,
    );
}

impl Mat3 {
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    );
}

impl Mat4 {
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );
}
