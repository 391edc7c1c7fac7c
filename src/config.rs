use std::{fs::File, io::BufReader, path::Path};

use crate::error::{GlimmerError, GlimmerResult};

/// Everything tunable about the simulation. The defaults reproduce the
/// curve shapes observed on the reference installation; partial JSON files
/// are fine, unspecified sections keep their defaults.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of pixels on the strip.
    pub strip_len: usize,
    /// Frame pacing target in milliseconds.
    pub frame_period_ms: u64,
    /// Spawn determinism seed; entropy-seeded when unset.
    pub seed: Option<u64>,
    pub spawn: SpawnRates,
    pub drift: DriftTuning,
    pub melt: MeltTuning,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strip_len: 1180,
            frame_period_ms: 80,
            seed: None,
            spawn: SpawnRates::default(),
            drift: DriftTuning::default(),
            melt: MeltTuning::default(),
        }
    }
}

/// Spawn cadence per sprite kind, in frames between spawns. 0 disables
/// that kind entirely.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpawnRates {
    pub drift_every: u64,
    pub melt_every: u64,
}

impl Default for SpawnRates {
    fn default() -> Self {
        Self {
            drift_every: 32,
            melt_every: 16,
        }
    }
}

/// Lifetime and motion parameters for drifting pixels.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DriftTuning {
    /// Fade-in ramp length in ticks.
    pub fade_in_ticks: u32,
    /// Age after which the fade-out ramp begins.
    pub fade_out_after: u32,
    /// Age past which the sprite dies.
    pub max_age: u32,
    /// Ticks of stillness before drift begins.
    pub settle_ticks: u32,
    /// Ticks over which velocity ramps up to its sampled maximum.
    pub boost_ticks: u32,
    /// Magnitude bound for the sampled velocity, pixels per tick.
    pub max_speed: f32,
}

impl Default for DriftTuning {
    fn default() -> Self {
        Self {
            fade_in_ticks: 30,
            fade_out_after: 100,
            max_age: 200,
            settle_ticks: 40,
            boost_ticks: 10,
            max_speed: 1.0,
        }
    }
}

/// Growth and brightness parameters for melting blobs.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MeltTuning {
    /// Ticks the blob holds its width while brightening.
    pub hold_ticks: u32,
    /// Width at spawn, in pixels.
    pub initial_width: f32,
    /// Width gained per tick once the hold window elapses.
    pub growth_per_tick: f32,
}

impl Default for MeltTuning {
    fn default() -> Self {
        Self {
            hold_ticks: 200,
            initial_width: 30.0,
            growth_per_tick: 0.1,
        }
    }
}

impl Config {
    pub fn from_json_file(path: &Path) -> GlimmerResult<Self> {
        let f = File::open(path)
            .map_err(|e| GlimmerError::config(format!("open '{}': {e}", path.display())))?;
        let config: Config = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| GlimmerError::config(format!("parse '{}': {e}", path.display())))?;
        Ok(config)
    }

    pub fn validate(&self) -> GlimmerResult<()> {
        if self.strip_len == 0 {
            return Err(GlimmerError::config("strip_len must be > 0"));
        }
        if self.frame_period_ms == 0 {
            return Err(GlimmerError::config("frame_period_ms must be > 0"));
        }
        if !self.drift.max_speed.is_finite() || self.drift.max_speed <= 0.0 {
            return Err(GlimmerError::config("drift.max_speed must be finite and > 0"));
        }
        if self.drift.fade_in_ticks > self.drift.fade_out_after {
            return Err(GlimmerError::config(
                "drift fade windows out of order (fade_in_ticks > fade_out_after)",
            ));
        }
        if self.drift.fade_out_after > self.drift.max_age {
            return Err(GlimmerError::config(
                "drift fade windows out of order (fade_out_after > max_age)",
            ));
        }
        if self.drift.boost_ticks == 0 {
            return Err(GlimmerError::config("drift.boost_ticks must be > 0"));
        }
        if !self.melt.initial_width.is_finite() || self.melt.initial_width < 1.0 {
            return Err(GlimmerError::config("melt.initial_width must be >= 1"));
        }
        if !self.melt.growth_per_tick.is_finite() || self.melt.growth_per_tick <= 0.0 {
            return Err(GlimmerError::config(
                "melt.growth_per_tick must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn json_roundtrip() {
        let config = Config {
            seed: Some(7),
            ..Config::default()
        };
        let s = serde_json::to_string_pretty(&config).unwrap();
        let de: Config = serde_json::from_str(&s).unwrap();
        assert_eq!(de.strip_len, 1180);
        assert_eq!(de.seed, Some(7));
        assert_eq!(de.spawn.melt_every, 16);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let de: Config =
            serde_json::from_str(r#"{"strip_len": 60, "melt": {"hold_ticks": 5}}"#).unwrap();
        assert_eq!(de.strip_len, 60);
        assert_eq!(de.melt.hold_ticks, 5);
        assert_eq!(de.melt.initial_width, 30.0);
        assert_eq!(de.frame_period_ms, 80);
    }

    #[test]
    fn validate_rejects_zero_strip() {
        let config = Config {
            strip_len: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_fade_windows_out_of_order() {
        let mut config = Config::default();
        config.drift.fade_in_ticks = 150;
        config.drift.fade_out_after = 100;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.drift.fade_out_after = 300;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_speed() {
        let mut config = Config::default();
        config.drift.max_speed = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.drift.max_speed = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_melt_tuning() {
        let mut config = Config::default();
        config.melt.initial_width = 0.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.melt.growth_per_tick = -0.1;
        assert!(config.validate().is_err());
    }
}
