#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Alpha-composites `self` over `base`.
    ///
    /// Alpha outside [0, 1] is clamped; 0 returns `base` unchanged and
    /// 1 returns `self`.
    #[must_use]
    pub fn over(self, base: Colour, alpha: f32) -> Colour {
        let a = alpha.clamp(0.0, 1.0);

        Colour {
            r: blend_channel(self.r, base.r, a),
            g: blend_channel(self.g, base.g, a),
            b: blend_channel(self.b, base.b, a),
        }
    }
}

fn blend_channel(top: u8, bottom: u8, alpha: f32) -> u8 {
    let blended = f32::from(top) * alpha + f32::from(bottom) * (1.0 - alpha);
    blended.round().clamp(0.0, 255.0) as u8
}
