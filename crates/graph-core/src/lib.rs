// File: crates/graph-core/src/lib.rs
// Summary: Core library entry point; exports datasets, mapping, rendering and interaction state.

pub mod error;
pub mod types;
pub mod geometry;
pub mod axis;
pub mod grid;
pub mod scale;
pub mod dataset;
pub mod theme;
pub mod registry;
pub mod surface;
pub mod text;
pub mod skia_surface;
pub mod render;
pub mod controller;
pub mod panels;
pub mod illustrations;
pub mod config;

pub use error::{GraphError, Result};
pub use types::{Margins, PixelPoint};
pub use axis::AxisConfig;
pub use scale::{to_pixel, PlotMapper};
pub use dataset::{Dataset, FitShape, FitSpec, SamplePoint};
pub use theme::{parse_hex_color, Theme};
pub use registry::{Registry, PRACTICE, SCENARIOS};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use text::TextShaper;
pub use skia_surface::SkiaSurface;
pub use render::{render, GridMode, RenderOptions, VisibilityState};
pub use controller::{Control, ControlAction, ControlLabels, Controller, UserMark};
pub use panels::{Accordion, TabGroup};
pub use illustrations::{catalogue, render_illustration, Illustration};
pub use config::GraphConfig;
