//! Object colors, either fixed RGB or HSL for the randomly tinted buildings.

/// Color of a placed object. Components are in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb { r: f32, g: f32, b: f32 },
    Hsl { h: f32, s: f32, l: f32 },
}

impl Color {
    /// Color from a `0xRRGGBB` literal
    pub fn from_hex(hex: u32) -> Self {
        Color::Rgb {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    pub fn hsl(h: f32, s: f32, l: f32) -> Self {
        Color::Hsl { h, s, l }
    }

    /// RGB components, converting from HSL if needed
    pub fn to_rgb(self) -> [f32; 3] {
        match self {
            Color::Rgb { r, g, b } => [r, g, b],
            Color::Hsl { h, s, l } => hsl_to_rgb(h, s, l),
        }
    }

    /// RGBA with the given alpha, the layout materials are built from
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.to_rgb();
        [r, g, b, alpha]
    }

    /// Nearest `0xRRGGBB` value
    pub fn to_hex(self) -> u32 {
        let [r, g, b] = self.to_rgb();
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(r) << 16) | (channel(g) << 8) | channel(b)
    }
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}
