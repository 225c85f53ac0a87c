#![warn(clippy::pedantic)]

//! Conversions between the `glam` SIMD math types and the graphics-side
//! vectors and quaternions of `vecbridge_math`.
//!
//! Every conversion copies the components in order, with no normalization
//! or change of handedness.

pub use glam;

use glam::{DQuat, DVec2, DVec3, DVec4, Quat, Vec2, Vec3, Vec3A, Vec4};
use vecbridge_math::{
    quaternion::Quaternion,
    vector::{Vector2, Vector3, Vector4},
};

/// Converts a `glam` value into its graphics-side equivalent.
pub trait ToGraphics {
    type Output;

    fn to_graphics(self) -> Self::Output;
}

/// Converts a graphics-side value into its `glam` equivalent.
pub trait ToSimd {
    type Output;

    fn to_simd(self) -> Self::Output;
}

macro_rules! bridge_vec {
    ($simd:ty => $graphics:ident<$scalar:ty>, [$($dim:ident),*]) => {
        impl ToGraphics for $simd {
            type Output = $graphics<$scalar>;

            #[inline]
            fn to_graphics(self) -> Self::Output {
                let [$($dim),*] = self.to_array();
                $graphics::new($($dim),*)
            }
        }

        impl ToSimd for $graphics<$scalar> {
            type Output = $simd;

            #[inline]
            fn to_simd(self) -> Self::Output {
                <$simd>::new($(self.$dim),*)
            }
        }
    };
}

bridge_vec!(Vec2 => Vector2<f32>, [x, y]);
bridge_vec!(Vec3 => Vector3<f32>, [x, y, z]);
bridge_vec!(Vec4 => Vector4<f32>, [x, y, z, w]);
bridge_vec!(DVec2 => Vector2<f64>, [x, y]);
bridge_vec!(DVec3 => Vector3<f64>, [x, y, z]);
bridge_vec!(DVec4 => Vector4<f64>, [x, y, z, w]);

impl ToGraphics for Vec3A {
    type Output = Vector3<f32>;

    #[inline]
    fn to_graphics(self) -> Self::Output {
        let [x, y, z] = self.to_array();
        Vector3::new(x, y, z)
    }
}

macro_rules! bridge_quat {
    ($simd:ty => $scalar:ty) => {
        impl ToGraphics for $simd {
            type Output = Quaternion<$scalar>;

            #[inline]
            fn to_graphics(self) -> Self::Output {
                let [x, y, z, w] = self.to_array();
                Quaternion::new(x, y, z, w)
            }
        }

        impl ToSimd for Quaternion<$scalar> {
            type Output = $simd;

            #[inline]
            fn to_simd(self) -> Self::Output {
                <$simd>::from_xyzw(self.x, self.y, self.z, self.w)
            }
        }
    };
}

bridge_quat!(Quat => f32);
bridge_quat!(DQuat => f64);
