// File: crates/graph-core/src/config.rs
// Summary: TOML run configuration: surface size, theme, output directory, scenario filter, margin and color overrides.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Result;
use crate::registry::Registry;
use crate::render::RenderOptions;
use crate::theme::{self, parse_hex_color, Theme};
use crate::types::{Margins, HEIGHT, WIDTH};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GraphConfig {
    pub width: i32,
    pub height: i32,
    pub theme: String,
    pub output_dir: PathBuf,
    /// Only these scenario ids are rendered when set.
    pub scenarios: Option<Vec<String>>,
    pub margins: Option<MarginsConfig>,
    /// Scenario id -> `#rrggbb` fit color.
    pub colors: IndexMap<String, String>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct MarginsConfig {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
    pub edge: Option<u32>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: "classroom".to_string(),
            output_dir: PathBuf::from("target/out"),
            scenarios: None,
            margins: None,
            colors: IndexMap::new(),
        }
    }
}

impl GraphConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let cfg = Self::from_toml_str(&text)?;
        log::info!("loaded config from {}", path.as_ref().display());
        Ok(cfg)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    /// Scenario render options with this config's theme and margins applied.
    pub fn render_options(&self) -> RenderOptions {
        let mut opts = RenderOptions { theme: self.theme(), ..RenderOptions::default() };
        if let Some(m) = self.margins {
            let margins = Margins::new(m.left, m.right, m.top, m.bottom);
            opts.margins = match m.edge {
                Some(e) => margins.with_edge(e),
                None => margins,
            };
        }
        opts
    }

    pub fn wants(&self, id: &str) -> bool {
        match &self.scenarios {
            Some(list) => list.iter().any(|s| s == id),
            None => true,
        }
    }

    /// Apply the `[colors]` overrides to a registry that is still being set up.
    pub fn apply_colors(&self, mut registry: Registry) -> Result<Registry> {
        for (id, hex) in &self.colors {
            registry = registry.with_fit_color(id, parse_hex_color(hex)?)?;
        }
        Ok(registry)
    }
}
