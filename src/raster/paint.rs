use crate::foundation::core::{Point, Rgba8};
use crate::foundation::math::{byte, unit};

/// What a fill paints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// One flat color.
    Solid(Rgba8),
    /// Concentric two-stop radial gradient.
    Radial(RadialGradient),
}

impl From<Rgba8> for Paint {
    fn from(c: Rgba8) -> Self {
        Self::Solid(c)
    }
}

/// Radial gradient between two concentric circles.
///
/// Inside `inner_radius` the `inner` color is used, beyond `outer_radius` the `outer` color; in
/// between, colors are interpolated in premultiplied space so a transparent stop does not bleed
/// its (meaningless) color channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient {
    /// Shared centre of both circles.
    pub center: Point,
    /// Radius of the start circle.
    pub inner_radius: f64,
    /// Radius of the end circle.
    pub outer_radius: f64,
    /// Color at and inside the start circle.
    pub inner: Rgba8,
    /// Color at and beyond the end circle.
    pub outer: Rgba8,
}

impl RadialGradient {
    /// A gradient whose circles coincide paints nothing.
    pub fn is_degenerate(&self) -> bool {
        !(self.outer_radius - self.inner_radius).is_finite()
            || (self.outer_radius - self.inner_radius).abs() <= f64::EPSILON
    }

    /// Color at pixel `(x, y)`, sampled at the pixel centre.
    pub(crate) fn sample(&self, x: u32, y: u32) -> [u8; 4] {
        let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        let dist = p.distance(self.center);
        let span = self.outer_radius - self.inner_radius;
        let t = ((dist - self.inner_radius) / span).clamp(0.0, 1.0);
        lerp_premul(self.inner, self.outer, t as f32)
    }
}

impl Paint {
    /// Return `true` when filling with this paint cannot change any pixel.
    pub(crate) fn paints_nothing(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a == 0,
            Paint::Radial(g) => g.is_degenerate(),
        }
    }
}

fn lerp_premul(a: Rgba8, b: Rgba8, t: f32) -> [u8; 4] {
    let (aa, ba) = (unit(a.a), unit(b.a));
    let out_a = aa + (ba - aa) * t;
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }
    let ch = |ca: u8, cb: u8| {
        let pa = unit(ca) * aa;
        let pb = unit(cb) * ba;
        byte((pa + (pb - pa) * t) / out_a)
    };
    [ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b), byte(out_a)]
}
