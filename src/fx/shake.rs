use crate::foundation::core::Vec2;
use crate::fx::rng::RandomSource;

/// Options for [`shake`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShakeOpts {
    /// Largest displacement along either axis, in pixels.
    pub intensity: f64,
}

impl Default for ShakeOpts {
    fn default() -> Self {
        Self { intensity: 25.0 }
    }
}

/// Random screen-shake displacement, each axis in `[-intensity, intensity)`.
///
/// Draws nothing; the host applies the offset when presenting.
pub fn shake(rng: &mut (impl RandomSource + ?Sized), opts: &ShakeOpts) -> Vec2 {
    let x = (rng.next_f64() - 0.5) * 2.0 * opts.intensity;
    let y = (rng.next_f64() - 0.5) * 2.0 * opts.intensity;
    Vec2::new(x, y)
}
