use crate::error::{GlimmerError, GlimmerResult};

/// One pixel's worth of color, 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Additive blend: per-channel sum clamped at 255.
    pub fn saturating_add(self, other: Rgb8) -> Rgb8 {
        Rgb8 {
            r: self.r.saturating_add(other.r),
            g: self.g.saturating_add(other.g),
            b: self.b.saturating_add(other.b),
        }
    }

    /// Per-channel multiply, truncated toward zero. Factors outside [0,1]
    /// clamp at the channel range instead of wrapping.
    pub fn scaled(self, factor: f32) -> Rgb8 {
        Rgb8 {
            r: (f32::from(self.r) * factor) as u8,
            g: (f32::from(self.g) * factor) as u8,
            b: (f32::from(self.b) * factor) as u8,
        }
    }
}

/// Hue in degrees, saturation and value in [0,1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Copy with the value channel replaced, for brightness dimming
    /// ahead of conversion.
    pub fn with_value(self, v: f32) -> Hsv {
        Hsv { v, ..self }
    }

    /// Standard hue-sector conversion. Hue must lie in [0,360]; 360 wraps
    /// to sector 0. Anything else (negative, >360, NaN) has no defined
    /// sector and is rejected rather than defaulted.
    pub fn to_rgb8(self) -> GlimmerResult<Rgb8> {
        // NaN fails the range test, so it never reaches the sector match.
        if !(0.0..=360.0).contains(&self.h) {
            return Err(GlimmerError::invalid_color(format!(
                "hue {} is outside [0,360]",
                self.h
            )));
        }

        let s = self.s.clamp(0.0, 1.0);
        let v = self.v.clamp(0.0, 1.0);

        let hi = (self.h / 60.0).floor();
        let f = self.h / 60.0 - hi;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match hi as i32 {
            0 | 6 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            5 => (v, p, q),
            hi => {
                return Err(GlimmerError::invalid_color(format!(
                    "hue {} fell in undefined sector {hi}",
                    self.h
                )));
            }
        };

        Ok(Rgb8 {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_add_clamps_each_channel() {
        let a = Rgb8::new(200, 10, 255);
        let b = Rgb8::new(100, 20, 1);
        assert_eq!(a.saturating_add(b), Rgb8::new(255, 30, 255));
    }

    #[test]
    fn saturating_add_is_commutative() {
        let a = Rgb8::new(130, 200, 7);
        let b = Rgb8::new(180, 90, 250);
        assert_eq!(a.saturating_add(b), b.saturating_add(a));
    }

    #[test]
    fn scaled_truncates_toward_zero() {
        let c = Rgb8::new(255, 100, 3);
        assert_eq!(c.scaled(0.5), Rgb8::new(127, 50, 1));
        assert_eq!(c.scaled(0.0), Rgb8::BLACK);
        assert_eq!(c.scaled(1.0), c);
    }

    #[test]
    fn scaled_out_of_range_factor_clamps() {
        let c = Rgb8::new(200, 200, 200);
        assert_eq!(c.scaled(2.0), Rgb8::new(255, 255, 255));
        assert_eq!(c.scaled(-1.0), Rgb8::BLACK);
    }

    #[test]
    fn hue_0_is_pure_red() {
        let c = Hsv::new(0.0, 1.0, 1.0).to_rgb8().unwrap();
        assert_eq!(c, Rgb8::new(255, 0, 0));
    }

    #[test]
    fn hue_360_wraps_to_red() {
        let c = Hsv::new(360.0, 1.0, 1.0).to_rgb8().unwrap();
        assert_eq!(c, Rgb8::new(255, 0, 0));
    }

    #[test]
    fn primary_and_secondary_hues() {
        assert_eq!(
            Hsv::new(120.0, 1.0, 1.0).to_rgb8().unwrap(),
            Rgb8::new(0, 255, 0)
        );
        assert_eq!(
            Hsv::new(240.0, 1.0, 1.0).to_rgb8().unwrap(),
            Rgb8::new(0, 0, 255)
        );
        assert_eq!(
            Hsv::new(60.0, 1.0, 1.0).to_rgb8().unwrap(),
            Rgb8::new(255, 255, 0)
        );
    }

    #[test]
    fn all_in_domain_hues_produce_valid_channels() {
        for i in 0..3600 {
            let h = i as f32 / 10.0;
            assert!(Hsv::new(h, 1.0, 1.0).to_rgb8().is_ok(), "hue {h}");
        }
    }

    #[test]
    fn out_of_domain_hues_are_rejected() {
        assert!(Hsv::new(-0.1, 1.0, 1.0).to_rgb8().is_err());
        assert!(Hsv::new(360.1, 1.0, 1.0).to_rgb8().is_err());
        assert!(Hsv::new(f32::NAN, 1.0, 1.0).to_rgb8().is_err());
        assert!(Hsv::new(f32::INFINITY, 1.0, 1.0).to_rgb8().is_err());
    }

    #[test]
    fn value_dims_linearly() {
        let c = Hsv::new(0.0, 1.0, 0.5).to_rgb8().unwrap();
        assert_eq!(c, Rgb8::new(127, 0, 0));
    }
}
