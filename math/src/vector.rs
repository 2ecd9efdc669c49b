use super::dot;
use core::{
    fmt,
    ops::{Add, Div, Mul, Sub},
};

pub(crate) fn fmt_components(f: &mut fmt::Formatter<'_>, components: &[f32]) -> fmt::Result {
    write!(f, "[")?;
    for (index, component) in components.iter().enumerate() {
        if index != 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", component)?;
    }
    write!(f, "]")
}

macro_rules! impl_vec {
    ($(#[$meta:meta])* $vec:ident, $n:literal, $($field:ident),+) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq)]
        pub struct $vec {
            $(pub $field: f32,)+
        }

        impl $vec {
            pub const ZERO: Self = Self { $($field: 0.0,)+ };

            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field,)+ }
            }

            /// Creates a vector with every component set to `v`.
            #[inline]
            pub const fn splat(v: f32) -> Self {
                Self { $($field: v,)+ }
            }

            #[inline]
            pub fn to_array(self) -> [f32; $n] {
                [$(self.$field),+]
            }

            #[inline]
            pub fn dot(self, rhs: Self) -> f32 {
                dot(&self.to_array(), &rhs.to_array())
            }

            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.length_squared().sqrt()
            }

            /// Returns `self` scaled to unit length.
            ///
            /// A vector whose length is exactly `0.0` normalizes to the zero
            /// vector instead of producing NaN components.
            #[allow(clippy::float_cmp)]
            pub fn normalize(self) -> Self {
                let len = self.length();
                if len != 0.0 {
                    self / len
                } else {
                    Self::ZERO
                }
            }

            /// Like [`Self::normalize`] but returns `None` when the length is
            /// zero or not finite.
            #[allow(clippy::float_cmp)]
            pub fn try_normalize(self) -> Option<Self> {
                let len = self.length();
                if len != 0.0 && len.is_finite() {
                    Some(self / len)
                } else {
                    None
                }
            }

            /// Divides by `rhs`, or returns `None` when `rhs` is zero.
            ///
            /// The `/` operator never checks and follows IEEE-754 division.
            #[allow(clippy::float_cmp)]
            pub fn checked_div(self, rhs: f32) -> Option<Self> {
                if rhs == 0.0 {
                    None
                } else {
                    Some(self / rhs)
                }
            }

            #[inline]
            pub fn is_finite(self) -> bool {
                $(self.$field.is_finite())&&+
            }

            #[inline]
            pub fn is_nan(self) -> bool {
                $(self.$field.is_nan())||+
            }
        }

        impl From<[f32; $n]> for $vec {
            #[inline]
            fn from(a: [f32; $n]) -> Self {
                let [$($field),+] = a;
                Self::new($($field),+)
            }
        }

        impl From<$vec> for [f32; $n] {
            #[inline]
            fn from(v: $vec) -> Self {
                v.to_array()
            }
        }

        impl Add<$vec> for $vec {
            type Output = $vec;
            #[inline]
            fn add(self, rhs: $vec) -> Self::Output {
                Self { $($field: self.$field + rhs.$field,)+ }
            }
        }

        impl Sub<$vec> for $vec {
            type Output = $vec;
            #[inline]
            fn sub(self, rhs: $vec) -> Self::Output {
                Self { $($field: self.$field - rhs.$field,)+ }
            }
        }

        impl Mul<f32> for $vec {
            type Output = $vec;
            #[inline]
            fn mul(self, rhs: f32) -> Self::Output {
                Self { $($field: self.$field * rhs,)+ }
            }
        }

        impl Div<f32> for $vec {
            type Output = $vec;
            #[inline]
            fn div(self, rhs: f32) -> Self::Output {
                Self { $($field: self.$field / rhs,)+ }
            }
        }

        impl fmt::Display for $vec {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_components(f, &self.to_array())
            }
        }
    };
}

impl_vec!(
    /// A 2-component vector.
    Vec2, 2, x, y
);
impl_vec!(
    /// A 3-component vector.
    Vec3, 3, x, y, z
);
impl_vec!(
    /// A 4-component vector.
    Vec4, 4, x, y, z, w
);

impl Vec3 {
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}
