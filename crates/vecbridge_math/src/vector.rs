use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::number_traits::{Float, Zero};

pub type Vector2f = Vector2<f32>;
pub type Vector3f = Vector3<f32>;
pub type Vector4f = Vector4<f32>;
pub type Vector2d = Vector2<f64>;
pub type Vector3d = Vector3<f64>;
pub type Vector4d = Vector4<f64>;

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, ($($dim:ident : $TY:ty => $idx:tt,)*)) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        pub struct $name<T = f32> {
            $(pub $dim: T,)*
        }

        impl<T> $name<T> {
            pub fn new($($dim: T),*) -> Self {
                Self {
                    $($dim),*
                }
            }
        }

        impl<T> $name<T>
        where T: PartialEq {
            /// Component-wise IEEE-754 equality, `NaN` never compares equal.
            #[must_use]
            pub fn exact_eq(&self, other: &Self) -> bool {
                $(self.$dim == other.$dim)&&*
            }
        }

        impl<T> $name<T>
        where T: Float {
            /// Returns `true` when every component of `other` lies strictly
            /// closer than `epsilon` to the matching component of `self`.
            ///
            /// Components are compared independently, a difference of exactly
            /// `epsilon` is not equal.
            #[must_use]
            pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
                $((other.$dim - self.$dim).abs() < epsilon)&&*
            }

            pub fn norm(&self) -> T {
                let mut norm = T::zero();
                $(norm = norm + self.$dim * self.$dim;)*
                norm.sqrt()
            }

            pub fn normalized(&self) -> Self {
                let norm = self.norm();
                Self {
                    $($dim: self.$dim / norm),*
                }
            }
        }

        impl<T> Default for $name<T>
        where T: Zero {
            fn default() -> Self {
                Self {
                    $($dim: T::zero(),)*
                }
            }
        }

        impl<T> Add for $name<T>
        where
            T: Copy + Add<Output = T>, {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim + rhs.$dim),*
                }
            }
        }

        impl<T> Sub for $name<T>
        where
            T: Copy + Sub<Output = T>, {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: self.$dim - rhs.$dim),*
                }
            }
        }

        impl<T> Mul<T> for $name<T>
        where
            T: Copy + Mul<Output = T>, {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim * rhs),*
                }
            }
        }

        impl<T> Div<T> for $name<T>
        where
            T: Copy + Div<Output = T>, {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self {
                    $($dim: self.$dim / rhs),*
                }
            }
        }

        impl<T> Neg for $name<T>
        where
            T: Copy + Neg<Output = T>,
        {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl<T> Display for $name<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl<T> From<($($TY),*)> for $name<T>
        where
            T: Copy {
            fn from(tuple: ($($TY),*)) -> Self {
                Self {
                    $($dim: tuple.$idx),*
                }
            }
        }

        impl<T> From<$name<T>> for ($($TY),*)
        where
            T: Copy,
        {
            fn from(vector: $name<T>) -> Self {
                ($(vector.$dim),*)
            }
        }
    };
}

struct_vec!(Vector2: "({}, {})", (x: T => 0, y: T => 1,));
struct_vec!(Vector3: "({}, {}, {})", (x: T => 0, y: T => 1, z: T => 2,));
struct_vec!(Vector4: "({}, {}, {}, {})", (x: T => 0, y: T => 1, z: T => 2, w: T => 3,));

impl<T> From<[T; 3]> for Vector3<T>
where
    T: Copy,
{
    fn from(value: [T; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    fn from(value: Vector3<T>) -> Self {
        [value.x, value.y, value.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn vector3_new() {
        let v = Vector3::new(1, 2, 3);

        assert_eq!(v.x, 1);
        assert_eq!(v.y, 2);
        assert_eq!(v.z, 3);
    }

    #[test]
    fn add() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 5, 6);

        let result = a + b;

        assert_eq!(result, Vector3::new(5, 7, 9));
    }

    #[test]
    fn sub() {
        let a = Vector3::new(1, 2, 3);
        let b = Vector3::new(4, 3, 2);

        let result = a - b;

        assert_eq!(result, Vector3::new(-3, -1, 1));
    }

    #[test]
    fn mul_scalar() {
        let result = Vector2::new(1, 2) * 5;

        assert_eq!(result, Vector2::new(5, 10));
    }

    #[test]
    fn div_scalar() {
        let result = Vector4::new(5, 10, 15, 20) / 5;

        assert_eq!(result, Vector4::new(1, 2, 3, 4));
    }

    #[test]
    fn neg() {
        let result = -Vector3::new(1, 2, 3);

        assert_eq!(result, Vector3::new(-1, -2, -3));
    }

    #[test]
    fn display() {
        assert_eq!("(1, 2, 3)", &format!("{}", Vector3::new(1, 2, 3)));
        assert_eq!("(1.5, -2)", &format!("{}", Vector2::new(1.5, -2.0)));
        assert_eq!("(0, 1, 2, 3)", &format!("{}", Vector4::new(0, 1, 2, 3)));
    }

    #[test]
    fn norm() {
        let vector = Vector3::new(1.0, 2.0, 3.0);
        assert_float_absolute_eq!(vector.norm(), 3.74, 0.01);
    }

    #[test]
    fn normalized() {
        let vector = Vector3::new(1.0, 2.0, 3.0);

        let normalized = vector.normalized();

        assert_float_absolute_eq!(normalized.x, 0.26, 0.01);
        assert_float_absolute_eq!(normalized.y, 0.53, 0.01);
        assert_float_absolute_eq!(normalized.z, 0.80, 0.01);
    }

    #[test]
    fn default() {
        let vector = Vector4::<f32>::default();

        assert_float_absolute_eq!(vector.x, 0.0, 0.0);
        assert_float_absolute_eq!(vector.y, 0.0, 0.0);
        assert_float_absolute_eq!(vector.z, 0.0, 0.0);
        assert_float_absolute_eq!(vector.w, 0.0, 0.0);
    }

    #[test]
    fn from_tuple() {
        let vector = Vector4::from((0, 1, 2, 3));

        assert_eq!(vector, Vector4::new(0, 1, 2, 3));
    }

    #[test]
    fn into_tuple() {
        let tuple: (f32, f32) = Vector2::new(0.5, 1.5).into();

        assert_eq!(tuple, (0.5, 1.5));
    }

    #[test]
    fn array_conversions() {
        let vector = Vector3::from([1, 2, 3]);
        let array: [i32; 3] = vector.into();

        assert_eq!(vector, Vector3::new(1, 2, 3));
        assert_eq!(array, [1, 2, 3]);
    }

    #[test]
    fn exact_eq_identical_components() {
        let v = Vector3f::new(1.0, -2.5, 3.25);
        let other = Vector3f::new(1.0, -2.5, 3.25);

        assert!(v.exact_eq(&other));
    }

    #[test]
    fn exact_eq_differing_component() {
        let v = Vector3f::new(1.0, 2.0, 3.0);

        assert!(!v.exact_eq(&Vector3f::new(1.0, 2.0, 3.000_001)));
    }

    #[test]
    fn exact_eq_nan_is_never_equal() {
        let v = Vector3f::new(f32::NAN, 0.0, 0.0);

        assert!(!v.exact_eq(&v));
    }

    #[test]
    fn exact_eq_signed_zero() {
        let v = Vector3f::new(0.0, 0.0, 0.0);

        assert!(v.exact_eq(&Vector3f::new(-0.0, -0.0, -0.0)));
    }

    #[test]
    fn exact_eq_vector2_and_vector4() {
        let v2 = Vector2f::new(0.5, -1.5);
        let v4 = Vector4f::new(1.0, 2.0, 3.0, 4.0);

        assert!(v2.exact_eq(&Vector2f::new(0.5, -1.5)));
        assert!(!v2.exact_eq(&Vector2f::new(0.5, -1.500_000_1)));
        assert!(v4.exact_eq(&Vector4f::new(1.0, 2.0, 3.0, 4.0)));
        assert!(!v4.exact_eq(&Vector4f::new(1.0, 2.0, 3.0, f32::NAN)));
    }

    #[test]
    fn approx_eq_within_epsilon() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        let other = Vector3f::new(1.05, 1.95, 3.01);

        assert!(v.approx_eq(&other, 0.1));
    }

    #[test]
    fn approx_eq_single_component_outside_epsilon() {
        let v = Vector3f::new(1.0, 2.0, 3.0);
        let other = Vector3f::new(1.0, 2.0, 3.5);

        assert!(!v.approx_eq(&other, 0.1));
    }

    #[test]
    fn approx_eq_difference_equal_to_epsilon_is_not_equal() {
        let v = Vector3f::new(0.0, 0.0, 0.0);
        let other = Vector3f::new(0.5, 0.0, 0.0);

        assert!(!v.approx_eq(&other, 0.5));
        assert!(v.approx_eq(&other, 0.500_001));
    }

    #[test]
    fn approx_eq_compares_components_independently() {
        let v = Vector3d::new(0.0, 0.0, 0.0);
        let other = Vector3d::new(0.09, 0.09, 0.09);

        // Euclidean distance is ~0.156, each component is within 0.1.
        assert!(v.approx_eq(&other, 0.1));
    }

    #[test]
    fn approx_eq_non_positive_epsilon() {
        let v = Vector3f::new(1.0, 2.0, 3.0);

        assert!(!v.approx_eq(&v, 0.0));
        assert!(!v.approx_eq(&v, -1.0));
    }

    #[test]
    fn approx_eq_nan() {
        let v = Vector3f::new(1.0, 2.0, 3.0);

        assert!(!v.approx_eq(&Vector3f::new(1.0, f32::NAN, 3.0), 1.0));
        assert!(!v.approx_eq(&v, f32::NAN));
    }

    #[test]
    fn approx_eq_vector2_and_vector4() {
        assert!(Vector2f::new(1.0, 1.0).approx_eq(&Vector2f::new(1.001, 0.999), 0.01));
        assert!(!Vector4f::new(1.0, 1.0, 1.0, 1.0)
            .approx_eq(&Vector4f::new(1.0, 1.0, 1.0, 2.0), 0.01));
    }
}
