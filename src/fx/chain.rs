use crate::foundation::error::FxResult;
use crate::fx::chromatic::{ChromaticOpts, chromatic};
use crate::fx::context::FxContext;
use crate::fx::glitch::{GlitchOpts, glitch};
use crate::fx::noise::{NoiseOpts, noise};
use crate::fx::overlay::{
    BrightnessOpts, DesaturateOpts, FlashOpts, NightvisionOpts, ScanlinesOpts, TintOpts,
    VignetteOpts, brightness, desaturate, flash, nightvision, scanlines, tint, vignette,
};
use crate::raster::frame::FrameBuffer;

/// One configured effect, tagged by `"kind"` in JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// See [`chromatic`]. Always snapshots the frame.
    Chromatic(ChromaticOpts),
    /// See [`glitch`].
    Glitch(GlitchOpts),
    /// See [`noise`].
    Noise(NoiseOpts),
    /// See [`brightness`].
    Brightness(BrightnessOpts),
    /// See [`tint`].
    Tint(TintOpts),
    /// See [`flash`].
    Flash(FlashOpts),
    /// See [`scanlines`].
    Scanlines(ScanlinesOpts),
    /// See [`vignette`].
    Vignette(VignetteOpts),
    /// See [`desaturate`].
    Desaturate(DesaturateOpts),
    /// See [`nightvision`].
    Nightvision(NightvisionOpts),
}

impl Effect {
    /// Apply this effect to `frame`.
    pub fn apply(&self, ctx: &mut FxContext, frame: &mut FrameBuffer) {
        match self {
            Effect::Chromatic(o) => chromatic(ctx, frame, o, None),
            Effect::Glitch(o) => glitch(ctx, frame, o),
            Effect::Noise(o) => noise(ctx, frame, o),
            Effect::Brightness(o) => brightness(frame, o),
            Effect::Tint(o) => tint(frame, o),
            Effect::Flash(o) => flash(frame, o),
            Effect::Scanlines(o) => scanlines(frame, o),
            Effect::Vignette(o) => vignette(frame, o),
            Effect::Desaturate(o) => desaturate(frame, o),
            Effect::Nightvision(o) => nightvision(frame, o),
        }
    }
}

/// Ordered list of effects applied once per frame.
///
/// The order is exactly the caller's; nothing is reordered or merged.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectChain {
    /// Effects in application order.
    pub effects: Vec<Effect>,
}

impl EffectChain {
    /// Parse a chain from JSON such as `{"effects": [{"kind": "noise", "scale": 8}]}`.
    pub fn from_json(s: &str) -> FxResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> FxResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One of every effect, each with default options.
    pub fn with_all_defaults() -> Self {
        Self {
            effects: vec![
                Effect::Brightness(BrightnessOpts::default()),
                Effect::Tint(TintOpts::default()),
                Effect::Flash(FlashOpts::default()),
                Effect::Scanlines(ScanlinesOpts::default()),
                Effect::Vignette(VignetteOpts::default()),
                Effect::Desaturate(DesaturateOpts::default()),
                Effect::Nightvision(NightvisionOpts::default()),
                Effect::Chromatic(ChromaticOpts::default()),
                Effect::Glitch(GlitchOpts::default()),
                Effect::Noise(NoiseOpts::default()),
            ],
        }
    }

    /// Apply every effect in order.
    #[tracing::instrument(level = "trace", skip_all, fields(effects = self.effects.len()))]
    pub fn apply(&self, ctx: &mut FxContext, frame: &mut FrameBuffer) {
        for effect in &self.effects {
            effect.apply(ctx, frame);
        }
    }
}
