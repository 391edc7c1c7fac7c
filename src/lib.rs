#![forbid(unsafe_code)]

pub mod color;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod scene;
pub mod spawn;
pub mod sprite;
pub mod strip;
pub mod transport;

pub use color::{Hsv, Rgb8};
pub use config::{Config, DriftTuning, MeltTuning, SpawnRates};
pub use error::{GlimmerError, GlimmerResult};
pub use pipeline::{FrameReport, Pipeline};
pub use scene::Scene;
pub use spawn::Spawner;
pub use sprite::{DriftPixel, MeltBlob, Sprite};
pub use strip::Strip;
pub use transport::{DEFAULT_PORT, FrameSink, UdpSender};
