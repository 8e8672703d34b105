use crate::config::ColorConfig;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::{Srgb, Srgba, WithAlpha};

pub struct ThemeColors {
    pub orbit: Srgba<f64>,
    pub item: Srgba<f64>,
    pub progress: Srgba<f64>,
    pub pointer_halo: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext, overrides: &ColorConfig) -> Self {
        Self {
            orbit: Self::resolve(
                overrides.orbit.as_deref(),
                context,
                "borders",
                Srgba::new(0.5, 0.5, 0.5, 1.0),
                Some(1.0),
            ),
            item: Self::resolve(
                overrides.item.as_deref(),
                context,
                "accent_bg_color",
                Srgba::new(0.29, 0.54, 1.0, 0.92),
                Some(0.92),
            ),
            progress: Self::resolve(
                overrides.progress.as_deref(),
                context,
                "accent_bg_color",
                Srgba::new(0.29, 0.54, 1.0, 0.92),
                Some(0.92),
            ),
            pointer_halo: Self::resolve(
                overrides.pointer_halo.as_deref(),
                context,
                "accent_bg_color",
                Srgba::new(0.29, 0.54, 1.0, 0.53),
                Some(0.53),
            ),
            text: Self::resolve(
                overrides.text.as_deref(),
                context,
                "theme_fg_color",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                None,
            ),
        }
    }

    fn resolve(
        hex: Option<&str>,
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        hex.and_then(|hex| Self::parse_hex(hex, alpha_override.unwrap_or(1.0)))
            .unwrap_or_else(|| Self::lookup_color(context, name, fallback, alpha_override))
    }

    pub fn parse_hex(hex: &str, alpha: f64) -> Option<Srgba<f64>> {
        match hex.trim().parse::<Srgb<u8>>() {
            Ok(rgb) => Some(rgb.into_format::<f64>().with_alpha(alpha)),
            Err(e) => {
                log::warn!("Ignoring color {:?}: {}", hex, e);
                None
            }
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c: gdk4::RGBA| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.fancypicker-window, .fancypicker-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
