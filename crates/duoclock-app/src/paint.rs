/// Linear premultiplied RGBA color.
///
/// Invariant: `rgb` components are multiplied by `a`. Premultiplication is
/// what the glyph pipeline's blend state expects. Every color this app
/// draws is fully opaque, so the literal constants below are trivially
/// premultiplied.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::from_premul(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Shader-facing representation.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Surface clear color for the render pass.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_form_preserves_channel_order() {
        let c = Color::from_premul(0.1, 0.2, 0.3, 1.0);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn wgpu_form_widens_to_f64() {
        let c = Color::BLACK.to_wgpu();
        assert_eq!(c.a, 1.0);
        assert_eq!(c.r, 0.0);
    }
}
