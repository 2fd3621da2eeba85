use glam::{Quat, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    #[default]
    Linear,
    Step,
    CubicSpline,
}

/// Keyframe times plus values.
///
/// For `CubicSpline`, `values` holds `(in_tangent, value, out_tangent)`
/// triplets, so its length is `times.len() * 3`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack<T> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self {
            times,
            values,
            interpolation,
        }
    }

    /// Time of the last keyframe, or `0.0` for an empty track.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }
}

/// Keyframe data of a numeric curve binding.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveData {
    Scalar(KeyframeTrack<f32>),
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
    MorphWeights(KeyframeTrack<Vec<f32>>),
}

impl CurveData {
    #[must_use]
    pub fn duration(&self) -> f32 {
        match self {
            CurveData::Scalar(track) => track.duration(),
            CurveData::Vector3(track) => track.duration(),
            CurveData::Quaternion(track) => track.duration(),
            CurveData::MorphWeights(track) => track.duration(),
        }
    }
}
