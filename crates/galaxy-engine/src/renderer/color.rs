use crate::api::types::Theme;

/// RGBA color for surface drawing operations.
/// Channels are 0-255 floats so they map directly onto CSS `rgba()`;
/// alpha is 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB channels.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with the given alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS color string, e.g. `rgba(0, 255, 255, 0.6)`.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            self.a.clamp(0.0, 1.0)
        )
    }

    pub const CYAN: Self = Self::rgb(0.0, 255.0, 255.0);
    pub const NIGHT: Self = Self::rgb(18.0, 18.0, 18.0);
    pub const PAPER: Self = Self::rgb(245.0, 245.0, 245.0);
    pub const GRAY: Self = Self::rgb(100.0, 100.0, 100.0);
    pub const ASH: Self = Self::rgb(120.0, 120.0, 120.0);
}

/// Theme-dependent colors for every layer of the scene.
///
/// Alpha values here are the layer's base weight: per-entity alpha is
/// `weight * opacity` (stars) or `weight * life` (particles).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Trailing-fade fill; painted at `SceneConfig::fade_alpha`.
    pub background: Rgba,
    pub star: Rgba,
    pub particle: Rgba,
    /// Comet head; the tail is the same hue at alpha 0.
    pub comet_head: Rgba,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Rgba::NIGHT,
        star: Rgba::CYAN.with_alpha(0.6),
        particle: Rgba::CYAN.with_alpha(0.4),
        comet_head: Rgba::CYAN.with_alpha(0.8),
    };

    pub const LIGHT: Palette = Palette {
        background: Rgba::PAPER,
        star: Rgba::GRAY.with_alpha(0.4),
        particle: Rgba::ASH.with_alpha(0.3),
        comet_head: Rgba::GRAY.with_alpha(0.6),
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::DARK,
            Theme::Light => Self::LIGHT,
        }
    }

    pub fn star_color(&self, opacity: f32) -> Rgba {
        self.star.with_alpha(self.star.a * opacity)
    }

    pub fn particle_color(&self, life: f32) -> Rgba {
        self.particle.with_alpha(self.particle.a * life)
    }

    pub fn comet_tail(&self) -> Rgba {
        self.comet_head.with_alpha(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_formatting() {
        assert_eq!(Rgba::CYAN.with_alpha(0.5).to_css(), "rgba(0, 255, 255, 0.5)");
        assert_eq!(Rgba::NIGHT.with_alpha(0.05).to_css(), "rgba(18, 18, 18, 0.05)");
    }

    #[test]
    fn themes_use_distinct_backgrounds() {
        assert_ne!(
            Palette::for_theme(Theme::Dark).background,
            Palette::for_theme(Theme::Light).background
        );
    }

    #[test]
    fn star_alpha_weighted_by_opacity() {
        let dark = Palette::DARK.star_color(0.5);
        assert!((dark.a - 0.3).abs() < 1e-6);
        let light = Palette::LIGHT.star_color(1.0);
        assert!((light.a - 0.4).abs() < 1e-6);
        assert_eq!(light.r, 100.0);
    }

    #[test]
    fn comet_tail_is_transparent_head_hue() {
        let tail = Palette::DARK.comet_tail();
        assert_eq!(tail.a, 0.0);
        assert_eq!((tail.r, tail.g, tail.b), (0.0, 255.0, 255.0));
    }
}
