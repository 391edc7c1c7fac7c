use crate::color::Rgb8;

/// The frame buffer: a fixed-length run of pixels that sprites blend into
/// additively. All writes go through [`Strip::add`], which clips out-of-range
/// indices instead of erroring, so sprites may drift off either end freely.
#[derive(Clone, Debug)]
pub struct Strip {
    pixels: Vec<Rgb8>,
}

impl Strip {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: vec![Rgb8::BLACK; len],
        }
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    /// Reset every pixel to black at the top of a tick.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgb8::BLACK);
    }

    /// Additively blend `color` into the pixel at `index`. Indices outside
    /// the strip (including negative ones) are silently skipped.
    pub fn add(&mut self, index: i64, color: Rgb8) {
        let Ok(i) = usize::try_from(index) else {
            return;
        };
        if let Some(px) = self.pixels.get_mut(i) {
            *px = px.saturating_add(color);
        }
    }

    /// Wire serialization for the strip driver: 3 bytes per pixel in
    /// Green, Red, Blue order, one datagram per frame.
    pub fn to_grb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            out.push(px.g);
            out.push(px.r);
            out.push(px.b);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_strip_is_black() {
        let strip = Strip::new(8);
        assert_eq!(strip.len(), 8);
        assert!(strip.pixels().iter().all(|px| *px == Rgb8::BLACK));
    }

    #[test]
    fn add_blends_additively() {
        let mut strip = Strip::new(4);
        strip.add(2, Rgb8::new(10, 20, 30));
        strip.add(2, Rgb8::new(5, 250, 1));
        assert_eq!(strip.pixels()[2], Rgb8::new(15, 255, 31));
    }

    #[test]
    fn out_of_range_writes_are_noops() {
        let mut strip = Strip::new(4);
        strip.add(-1, Rgb8::new(255, 255, 255));
        strip.add(4, Rgb8::new(255, 255, 255));
        strip.add(i64::MIN, Rgb8::new(255, 255, 255));
        assert!(strip.pixels().iter().all(|px| *px == Rgb8::BLACK));
    }

    #[test]
    fn clear_resets_all_pixels() {
        let mut strip = Strip::new(4);
        strip.add(0, Rgb8::new(1, 2, 3));
        strip.clear();
        assert!(strip.pixels().iter().all(|px| *px == Rgb8::BLACK));
    }

    #[test]
    fn grb_bytes_follow_wire_order() {
        let mut strip = Strip::new(5);
        strip.add(3, Rgb8::new(255, 0, 0));
        let bytes = strip.to_grb_bytes();
        assert_eq!(bytes.len(), 15);
        for (offset, byte) in bytes.iter().enumerate() {
            // pure red lands on the R byte of pixel 3: offset 3*3 + 1
            let expected = if offset == 10 { 255 } else { 0 };
            assert_eq!(*byte, expected, "offset {offset}");
        }
    }
}
