use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    color::Rgb8,
    config::{Config, DriftTuning, MeltTuning, SpawnRates},
    error::GlimmerResult,
    sprite::{DriftPixel, MeltBlob, Sprite},
};

/// Samples spawn parameters on the cadence the config asks for. The
/// pipeline tells it which frame it is; the spawner decides what, if
/// anything, appears.
pub struct Spawner {
    rng: StdRng,
    strip_len: usize,
    rates: SpawnRates,
    drift: DriftTuning,
    melt: MeltTuning,
}

impl Spawner {
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            strip_len: config.strip_len,
            rates: config.spawn,
            drift: config.drift,
            melt: config.melt,
        }
    }

    /// Sprites due on this frame. Frame numbering starts at 1; frame 0
    /// never spawns. A cadence of 0 disables that kind.
    pub fn spawn_for_frame(&mut self, frame: u64) -> GlimmerResult<Vec<Sprite>> {
        let mut out = Vec::new();

        if due(self.rates.drift_every, frame) {
            let position = self.rng.gen_range(0..self.strip_len) as f32;
            let color = Rgb8::new(
                self.rng.gen_range(0..=u8::MAX),
                self.rng.gen_range(0..=u8::MAX),
                self.rng.gen_range(0..=u8::MAX),
            );
            let max_velocity = self
                .rng
                .gen_range(-self.drift.max_speed..self.drift.max_speed);
            out.push(Sprite::Drift(DriftPixel::new(
                position,
                color,
                max_velocity,
                self.drift,
            )));
        }

        if due(self.rates.melt_every, frame) {
            let position = self.rng.gen_range(0..self.strip_len) as i64;
            let hue = self.rng.gen_range(0.0f32..360.0);
            out.push(Sprite::Melt(MeltBlob::new(position, hue, self.melt)?));
        }

        Ok(out)
    }
}

fn due(every: u64, frame: u64) -> bool {
    every != 0 && frame != 0 && frame.is_multiple_of(every)
}
