//! Engine math types and single-precision coercion.
//!
//! The engine stores vectors, rotators and quaternions as 32-bit floats.
//! Editing tools work in double precision, so every value handed back to the
//! writer is first pushed through [`coerce32`] to land on exactly what the
//! engine would have read back.

pub use glam::{DQuat, DVec3};

use std::fmt;

/// Engine `Vector` struct (X, Y, Z).
pub type Vector = DVec3;

/// Engine `Quat` struct (X, Y, Z, W).
pub type Quaternion = DQuat;

/// Engine `Rotator` struct, angles in degrees.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rotator {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl Rotator {
    /// Zero rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }
}

impl fmt::Debug for Rotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rotator(pitch: {}, roll: {}, yaw: {})",
            self.pitch, self.roll, self.yaw
        )
    }
}

/// Engine `Transform` struct.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub rotation: Quaternion,
    pub translation: Vector,
    pub scale3d: Vector,
}

impl Transform {
    /// Identity transform (no rotation, no translation, unit scale).
    pub const IDENTITY: Self = Self {
        rotation: DQuat::IDENTITY,
        translation: DVec3::ZERO,
        scale3d: DVec3::ONE,
    };

    #[inline]
    pub const fn new(rotation: Quaternion, translation: Vector, scale3d: Vector) -> Self {
        Self {
            rotation,
            translation,
            scale3d,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Values that can be rounded to what a 32-bit float round trip yields.
///
/// Implementations are component-wise and idempotent.
pub trait Fp32: Sized {
    /// Return the nearest value whose components are exactly representable
    /// as IEEE-754 single precision floats.
    fn fp32(self) -> Self;
}

impl Fp32 for f64 {
    #[inline]
    fn fp32(self) -> Self {
        self as f32 as f64
    }
}

impl Fp32 for f32 {
    #[inline]
    fn fp32(self) -> Self {
        self
    }
}

impl Fp32 for DVec3 {
    #[inline]
    fn fp32(self) -> Self {
        DVec3::new(self.x.fp32(), self.y.fp32(), self.z.fp32())
    }
}

impl Fp32 for DQuat {
    #[inline]
    fn fp32(self) -> Self {
        // from_xyzw does not normalize
        DQuat::from_xyzw(self.x.fp32(), self.y.fp32(), self.z.fp32(), self.w.fp32())
    }
}

impl Fp32 for Rotator {
    #[inline]
    fn fp32(self) -> Self {
        Rotator::new(self.pitch.fp32(), self.roll.fp32(), self.yaw.fp32())
    }
}

impl Fp32 for Transform {
    #[inline]
    fn fp32(self) -> Self {
        Transform::new(
            self.rotation.fp32(),
            self.translation.fp32(),
            self.scale3d.fp32(),
        )
    }
}

/// Round `value` to what the engine's single-precision storage would yield.
///
/// NaN and infinities map to their single-precision equivalents; finite
/// values beyond the f32 range become infinities.
#[inline]
pub fn coerce32<T: Fp32>(value: T) -> T {
    value.fp32()
}
