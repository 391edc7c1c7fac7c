use crate::{
    color::{Hsv, Rgb8},
    config::{DriftTuning, MeltTuning},
    error::GlimmerResult,
    strip::Strip,
};

/// The closed set of particle kinds. Each sprite is a self-contained state
/// machine: the scene owns it by value, renders it once per tick, updates it
/// once per tick, and drops it the moment `update` reports death.
#[derive(Clone, Debug)]
pub enum Sprite {
    Drift(DriftPixel),
    Melt(MeltBlob),
}

impl Sprite {
    pub fn render(&self, strip: &mut Strip) -> GlimmerResult<()> {
        match self {
            Self::Drift(s) => {
                s.render(strip);
                Ok(())
            }
            Self::Melt(s) => s.render(strip),
        }
    }

    /// Advance one tick. Returns false once the sprite should be removed.
    pub fn update(&mut self) -> bool {
        match self {
            Self::Drift(s) => s.update(),
            Self::Melt(s) => s.update(),
        }
    }
}

/// A single pixel that fades in, drifts along the strip once it has
/// settled, and fades back out before dying of old age.
#[derive(Clone, Debug)]
pub struct DriftPixel {
    position: f32,
    velocity: f32,
    max_velocity: f32,
    age: u32,
    color: Rgb8,
    render_color: Rgb8,
    tuning: DriftTuning,
}

impl DriftPixel {
    pub fn new(position: f32, color: Rgb8, max_velocity: f32, tuning: DriftTuning) -> Self {
        Self {
            position,
            velocity: 0.0,
            max_velocity,
            age: 0,
            color,
            // the age-0 point of the fade curve
            render_color: Rgb8::BLACK,
            tuning,
        }
    }

    /// Three-tap anti-aliased splat around the fractional position. The
    /// center pixel gets the full render color; the neighbors split the
    /// remainder by the fractional offset. Off-strip taps clip silently.
    pub fn render(&self, strip: &mut Strip) {
        let base = self.position.floor();
        let frac = self.position - base;
        let center = base as i64;

        strip.add(center - 1, self.render_color.scaled(1.0 - frac));
        strip.add(center, self.render_color);
        strip.add(center + 1, self.render_color.scaled(frac));
    }

    pub fn update(&mut self) -> bool {
        let t = self.tuning;

        // Drift only begins once the sprite has settled; velocity then
        // ramps toward its sampled maximum over the boost window.
        if self.age > t.settle_ticks {
            if self.age < t.settle_ticks + t.boost_ticks {
                self.velocity += self.max_velocity / t.boost_ticks as f32;
            }
            self.position += self.velocity;
        }

        self.render_color = self.color.scaled(self.fade());

        let alive = self.age <= t.max_age;
        self.age += 1;
        alive
    }

    /// Brightness as a pure function of age: linear ramp in, full
    /// brightness through the middle window, linear ramp out.
    fn fade(&self) -> f32 {
        let t = self.tuning;
        if self.age < t.fade_in_ticks {
            self.age as f32 / t.fade_in_ticks as f32
        } else if self.age > t.fade_out_after {
            (t.max_age as f32 - self.age as f32) / (t.max_age - t.fade_out_after) as f32
        } else {
            1.0
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

/// A blob of fixed hue that brightens in place over its hold window, then
/// spreads outward, diluting its energy until it fades from view.
#[derive(Clone, Debug)]
pub struct MeltBlob {
    position: i64,
    color: Hsv,
    width: f32,
    age: u32,
    tuning: MeltTuning,
}

/// The 8-bit quantization floor: anything dimmer rounds to black on the
/// wire, so the blob is dead as soon as it drops below this.
const MIN_VISIBLE: f32 = 1.0 / 255.0;

impl MeltBlob {
    /// An out-of-domain hue is a spawn-contract violation and is rejected
    /// here, before the blob ever reaches the scene.
    pub fn new(position: i64, hue: f32, tuning: MeltTuning) -> GlimmerResult<Self> {
        let color = Hsv::new(hue, 1.0, 1.0);
        color.to_rgb8()?;
        Ok(Self {
            position,
            color,
            width: tuning.initial_width,
            age: 0,
            tuning,
        })
    }

    /// Paints every pixel within half-width of the center at `dim()`
    /// brightness; the two boundary pixels get the brightness further
    /// scaled by the fractional half-width, softening the edges.
    pub fn render(&self, strip: &mut Strip) -> GlimmerResult<()> {
        let half = self.width / 2.0;
        let ihw = half.floor() as i64;
        let frac = half - half.floor();

        let body = self.color.with_value(self.dim()).to_rgb8()?;
        for i in -ihw..ihw {
            strip.add(self.position + i, body);
        }

        let edge = self.color.with_value(self.dim() * frac).to_rgb8()?;
        strip.add(self.position - ihw - 1, edge);
        strip.add(self.position + ihw, edge);
        Ok(())
    }

    pub fn update(&mut self) -> bool {
        let holding = self.age < self.tuning.hold_ticks;
        self.age += 1;
        if holding {
            return true;
        }

        self.width += self.tuning.growth_per_tick;
        self.dim() > MIN_VISIBLE
    }

    /// Brightness multiplier: quadratic ramp over the hold window, then an
    /// inverse-cube falloff as the fixed energy spreads over the growing
    /// width.
    pub fn dim(&self) -> f32 {
        let t = self.tuning;
        if self.age < t.hold_ticks {
            let x = self.age as f32 / t.hold_ticks as f32;
            x * x
        } else {
            let d = t.initial_width / self.width;
            d * d * d
        }
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}
