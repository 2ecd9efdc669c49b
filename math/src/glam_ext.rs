//! Conversions to and from `glam`, which the renderer consumes.
//!
//! glam matrices are column-major, so matrix conversions transpose the
//! storage: element `(r, c)` here is `col(c)[r]` in glam.

use super::{Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

macro_rules! impl_glam_vec {
    ($vec:ident, $n:literal) => {
        impl From<$vec> for glam::$vec {
            #[inline]
            fn from(v: $vec) -> Self {
                glam::$vec::from(v.to_array())
            }
        }

        impl From<glam::$vec> for $vec {
            #[inline]
            fn from(v: glam::$vec) -> Self {
                $vec::from(<[f32; $n]>::from(v))
            }
        }
    };
}

macro_rules! impl_glam_mat {
    ($mat:ident) => {
        impl From<$mat> for glam::$mat {
            #[inline]
            fn from(m: $mat) -> Self {
                glam::$mat::from_cols_array(&m.transpose().elements)
            }
        }

        impl From<glam::$mat> for $mat {
            #[inline]
            fn from(m: glam::$mat) -> Self {
                $mat::from_rows_array(m.to_cols_array()).transpose()
            }
        }
    };
}

impl_glam_vec!(Vec2, 2);
impl_glam_vec!(Vec3, 3);
impl_glam_vec!(Vec4, 4);

impl_glam_mat!(Mat2);
impl_glam_mat!(Mat3);
impl_glam_mat!(Mat4);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn rand_mat4(rng: &mut impl Rng) -> Mat4 {
        let mut m = Mat4::ZERO;
        for e in m.elements.iter_mut() {
            *e = rng.gen_range(-8..=8) as f32;
        }
        m
    }

    fn rand_mat3(rng: &mut impl Rng) -> Mat3 {
        let mut m = Mat3::ZERO;
        for e in m.elements.iter_mut() {
            *e = rng.gen_range(-8..=8) as f32;
        }
        m
    }

    #[test]
    fn test_vec_conversion() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let g = glam::Vec3::from(v);
        assert_eq!(g, glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::from(g), v);

        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(glam::Vec4::from(v).to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Vec2::from(glam::Vec2::new(5.0, 6.0)), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn test_mat_conversion_keeps_layout() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let g = glam::Mat3::from(m);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(m[(r, c)], g.col(c).to_array()[r]);
            }
        }
        assert_eq!(Mat3::from(g), m);

        let m = Mat2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            glam::Mat2::from(m),
            glam::Mat2::from_cols(glam::Vec2::new(1.0, 3.0), glam::Vec2::new(2.0, 4.0))
        );
        assert_eq!(Mat2::from(glam::Mat2::from(m)), m);
    }

    #[test]
    fn test_mul_matches_glam() {
        let mut rng = rand_pcg::Pcg32::seed_from_u64(0x91a3);
        for _ in 0..50 {
            let a = rand_mat4(&mut rng);
            let b = rand_mat4(&mut rng);
            let expected = glam::Mat4::from(a) * glam::Mat4::from(b);
            assert_eq!(a * b, Mat4::from(expected));

            let v = a.row(0);
            let expected = glam::Mat4::from(b) * glam::Vec4::from(v);
            assert_eq!(b * v, Vec4::from(expected));

            let a = rand_mat3(&mut rng);
            let b = rand_mat3(&mut rng);
            let expected = glam::Mat3::from(a) * glam::Mat3::from(b);
            assert_eq!(a * b, Mat3::from(expected));
            assert_eq!(a.transpose(), Mat3::from(glam::Mat3::from(a).transpose()));
        }
    }
}
