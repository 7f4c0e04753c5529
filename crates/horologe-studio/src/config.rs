use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use horologe_engine::coords::Viewport;
use horologe_engine::schedule::DEFAULT_REDRAW_INTERVAL;
use horologe_face::FaceVariant;

/// Studio settings, read from `HOROLOGE_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    pub variant: FaceVariant,
    /// TrueType/OpenType file for numerals. `None` uses estimated metrics.
    pub font_path: Option<PathBuf>,
    pub viewport: Viewport,
    /// Frames to render before detaching.
    pub frames: u64,
    pub interval: Duration,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            variant: FaceVariant::Classic,
            font_path: None,
            viewport: Viewport::new(1080.0, 1080.0),
            frames: 300,
            interval: DEFAULT_REDRAW_INTERVAL,
        }
    }
}

impl StudioConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("HOROLOGE_VARIANT") {
            config.variant = v.parse().context("HOROLOGE_VARIANT")?;
        }
        if let Some(v) = lookup("HOROLOGE_FONT") {
            config.font_path = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup("HOROLOGE_VIEWPORT") {
            config.viewport = parse_viewport(&v).context("HOROLOGE_VIEWPORT")?;
        }
        if let Some(v) = lookup("HOROLOGE_FRAMES") {
            config.frames = v.trim().parse().context("HOROLOGE_FRAMES")?;
        }
        if let Some(v) = lookup("HOROLOGE_INTERVAL_MS") {
            let ms: u64 = v.trim().parse().context("HOROLOGE_INTERVAL_MS")?;
            if ms == 0 {
                bail!("HOROLOGE_INTERVAL_MS must be positive");
            }
            config.interval = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

/// Parses `WIDTHxHEIGHT`, e.g. `1080x720`.
fn parse_viewport(s: &str) -> Result<Viewport> {
    let Some((w, h)) = s.trim().split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got {s:?}");
    };
    let width: f32 = w.trim().parse().with_context(|| format!("bad width {w:?}"))?;
    let height: f32 = h.trim().parse().with_context(|| format!("bad height {h:?}"))?;
    Ok(Viewport::new(width, height))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from(pairs: &[(&str, &str)]) -> Result<StudioConfig> {
        let env: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        StudioConfig::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn empty_env_gives_defaults() {
        assert_eq!(from(&[]).unwrap(), StudioConfig::default());
    }

    #[test]
    fn reads_every_key() {
        let c = from(&[
            ("HOROLOGE_VARIANT", "accent"),
            ("HOROLOGE_FONT", "/tmp/gabriela.ttf"),
            ("HOROLOGE_VIEWPORT", "800x600"),
            ("HOROLOGE_FRAMES", "12"),
            ("HOROLOGE_INTERVAL_MS", "16"),
        ])
        .unwrap();

        assert_eq!(c.variant, FaceVariant::Accent);
        assert_eq!(c.font_path, Some(PathBuf::from("/tmp/gabriela.ttf")));
        assert_eq!(c.viewport, Viewport::new(800.0, 600.0));
        assert_eq!(c.frames, 12);
        assert_eq!(c.interval, Duration::from_millis(16));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(from(&[("HOROLOGE_VARIANT", "digital")]).is_err());
        assert!(from(&[("HOROLOGE_VIEWPORT", "800")]).is_err());
        assert!(from(&[("HOROLOGE_VIEWPORT", "wide x 600")]).is_err());
        assert!(from(&[("HOROLOGE_FRAMES", "-1")]).is_err());
        assert!(from(&[("HOROLOGE_INTERVAL_MS", "0")]).is_err());
    }

    #[test]
    fn error_names_the_variable() {
        let err = from(&[("HOROLOGE_FRAMES", "many")]).unwrap_err();
        assert!(format!("{err:#}").contains("HOROLOGE_FRAMES"));
    }
}
