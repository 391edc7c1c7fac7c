use std::time::{Duration, Instant};

use crate::{
    config::Config,
    error::{GlimmerError, GlimmerResult},
    scene::Scene,
    spawn::Spawner,
    strip::Strip,
    transport::FrameSink,
};

/// Per-frame stats, reported after pruning.
#[derive(Clone, Copy, Debug)]
pub struct FrameReport {
    pub frame: u64,
    pub live_sprites: usize,
}

/// Owns one tick's worth of everything: the scene, the spawner, the reused
/// frame buffer, and the frame counter. Strictly single-threaded; nothing
/// blocks except the pacing sleep and the socket send inside the sink.
pub struct Pipeline {
    config: Config,
    scene: Scene,
    spawner: Spawner,
    strip: Strip,
    frame: u64,
    dropped_frames: u64,
}

impl Pipeline {
    pub fn new(config: Config) -> GlimmerResult<Self> {
        config.validate()?;
        let spawner = Spawner::new(&config);
        let strip = Strip::new(config.strip_len);
        Ok(Self {
            config,
            scene: Scene::new(),
            spawner,
            strip,
            frame: 0,
            dropped_frames: 0,
        })
    }

    /// One tick, no pacing: clear the buffer, push the spawns due this
    /// frame, simulate, serialize, hand the payload to the sink.
    #[tracing::instrument(skip_all, fields(frame = self.frame + 1))]
    pub fn step(&mut self, sink: &mut dyn FrameSink) -> GlimmerResult<FrameReport> {
        self.frame += 1;
        self.strip.clear();

        for sprite in self.spawner.spawn_for_frame(self.frame)? {
            self.scene.push(sprite);
        }
        self.scene.tick(&mut self.strip)?;

        sink.send_frame(&self.strip.to_grb_bytes())?;
        Ok(FrameReport {
            frame: self.frame,
            live_sprites: self.scene.len(),
        })
    }

    /// The paced frame loop. Runs until `max_frames` is reached, or forever
    /// when it is `None`.
    ///
    /// A failed send drops that frame and keeps going; the simulation has
    /// already advanced and a lost datagram costs one flicker at worst.
    /// Everything else (a bad hue out of spawn, a config bug) is a contract
    /// violation and aborts the run.
    pub fn run(&mut self, sink: &mut dyn FrameSink, max_frames: Option<u64>) -> GlimmerResult<()> {
        let period = Duration::from_millis(self.config.frame_period_ms);

        loop {
            let start = Instant::now();

            match self.step(sink) {
                Ok(report) => {
                    tracing::debug!(
                        frame = report.frame,
                        sprites = report.live_sprites,
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "frame sent"
                    );
                }
                Err(GlimmerError::Transport(msg)) => {
                    self.dropped_frames += 1;
                    tracing::warn!(dropped = self.dropped_frames, %msg, "frame dropped");
                }
                Err(err) => return Err(err),
            }

            if let Some(max) = max_frames
                && self.frame >= max
            {
                return Ok(());
            }

            // An overrunning tick starts the next one immediately; there is
            // no deadline backlog to catch up on.
            if let Some(rest) = period.checked_sub(start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn live_sprites(&self) -> usize {
        self.scene.len()
    }

    pub fn dropped_frames(&self) -> u64 {
        self.dropped_frames
    }
}
