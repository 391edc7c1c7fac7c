use crate::{error::GlimmerResult, sprite::Sprite, strip::Strip};

/// The unordered collection of live sprites. Render order is irrelevant
/// because additive blending commutes, so sprites live in a plain `Vec`
/// owned by value.
#[derive(Default)]
pub struct Scene {
    sprites: Vec<Sprite>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// One tick's worth of simulation: render every sprite into the buffer,
    /// then update each exactly once and drop the ones that died.
    pub fn tick(&mut self, strip: &mut Strip) -> GlimmerResult<()> {
        for sprite in &self.sprites {
            sprite.render(strip)?;
        }
        self.sprites.retain_mut(|sprite| sprite.update());
        Ok(())
    }
}
