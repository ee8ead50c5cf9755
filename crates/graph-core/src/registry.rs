// File: crates/graph-core/src/registry.rs
// Summary: Dataset registry; the built-in scenario, practice and illustration tables, immutable once shared.

use indexmap::IndexMap;
use skia_safe as skia;

use crate::axis::AxisConfig;
use crate::dataset::{Dataset, FitSpec};
use crate::error::{GraphError, Result};

/// Scenario tabs, in display order.
pub const SCENARIOS: [&str; 4] = ["taxi", "study", "spring", "cooling"];
/// Free-draw practice exercise.
pub const PRACTICE: &str = "practice";

const INDIGO: skia::Color = skia::Color::new(0xff66_7eea);
const EMERALD: skia::Color = skia::Color::new(0xff10_b981);
const AMBER: skia::Color = skia::Color::new(0xfff5_9e0b);
const SKY: skia::Color = skia::Color::new(0xff0e_a5e9);

#[derive(Clone, Debug, Default)]
pub struct Registry {
    datasets: IndexMap<String, Dataset>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated with every built-in dataset.
    pub fn builtin() -> Self {
        let mut r = Self::new();
        for (id, ds) in scenario_tables().into_iter().chain(illustration_tables()) {
            r.datasets.insert(id.to_string(), ds);
        }
        r
    }

    /// Add or replace a dataset. Only meaningful while the registry is still being set up.
    pub fn register(&mut self, id: impl Into<String>, dataset: Dataset) -> Result<()> {
        dataset.axis.validate()?;
        self.datasets.insert(id.into(), dataset);
        Ok(())
    }

    /// Builder-style override of one dataset's fit color.
    pub fn with_fit_color(mut self, id: &str, color: skia::Color) -> Result<Self> {
        let ds = self
            .datasets
            .get_mut(id)
            .ok_or_else(|| GraphError::NotFound(id.to_string()))?;
        ds.fit.color = color;
        Ok(self)
    }

    pub fn get(&self, id: &str) -> Result<&Dataset> {
        self.datasets.get(id).ok_or_else(|| GraphError::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.datasets.contains_key(id)
    }

    /// Registered identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize { self.datasets.len() }
    pub fn is_empty(&self) -> bool { self.datasets.is_empty() }
}

fn scenario_tables() -> Vec<(&'static str, Dataset)> {
    vec![
        (
            "taxi",
            Dataset::from_pairs(
                &[(0.0, 4.0), (2.0, 6.4), (4.0, 8.8), (6.0, 11.2), (8.0, 13.6), (10.0, 16.0)],
                AxisConfig::new(12.0, 18.0, 2.0, 4.0).with_labels("Distance (km)", "Fare ($)"),
                FitSpec::straight(INDIGO, 4.0),
            ),
        ),
        (
            "study",
            Dataset::from_pairs(
                &[(0.0, 35.0), (1.0, 45.0), (2.0, 58.0), (3.0, 68.0), (4.0, 75.0), (5.0, 85.0)],
                AxisConfig::new(6.0, 100.0, 1.0, 20.0).with_labels("Hours Studied", "Score (%)"),
                FitSpec::straight(EMERALD, 35.0),
            ),
        ),
        (
            "spring",
            Dataset::from_pairs(
                &[(0.0, 5.0), (50.0, 6.2), (100.0, 7.5), (150.0, 8.6), (200.0, 10.0), (250.0, 11.3)],
                AxisConfig::new(300.0, 14.0, 50.0, 2.0).with_labels("Mass (g)", "Length (cm)"),
                FitSpec::straight(AMBER, 5.0),
            ),
        ),
        (
            "cooling",
            Dataset::from_pairs(
                &[(0.0, 80.0), (2.0, 68.0), (4.0, 55.0), (6.0, 45.0), (8.0, 38.0), (10.0, 32.0)],
                AxisConfig::new(12.0, 100.0, 2.0, 20.0).with_labels("Time (min)", "Temp (°C)"),
                FitSpec::curve(SKY, 80.0),
            ),
        ),
        (
            PRACTICE,
            Dataset::from_pairs(
                &[(0.0, 0.0), (5.0, 1.2), (10.0, 2.0), (15.0, 3.0), (20.0, 3.5), (25.0, 4.8), (30.0, 5.9)],
                AxisConfig::new(35.0, 7.0, 5.0, 1.0)
                    .with_labels("Light Intensity (lux)", "Oxygen Production (cm³/min)"),
                FitSpec::segment(INDIGO, (0.0, -0.1), (32.0, 6.2)),
            ),
        ),
    ]
}

fn illustration_tables() -> Vec<(&'static str, Dataset)> {
    let frame = |max_x: f64, max_y: f64, x_step: f64, y_step: f64, fit: FitSpec| {
        Dataset::new(Vec::new(), AxisConfig::new(max_x, max_y, x_step, y_step), fit)
    };
    let unused_fit = FitSpec::straight(INDIGO, 0.0);
    vec![
        (
            "step1",
            Dataset::new(
                Vec::new(),
                AxisConfig::new(10.0, 10.0, 1.0, 1.0).with_labels("Independent Variable", "Dependent Variable"),
                unused_fit,
            ),
        ),
        ("step2", frame(50.0, 5.0, 10.0, 1.0, unused_fit)),
        (
            "step3",
            Dataset::new(
                Vec::new(),
                AxisConfig::new(10.0, 10.0, 1.0, 1.0).with_labels("Light intensity (lux)", "Oxygen (cm³/min)"),
                unused_fit,
            ),
        ),
        (
            "step4",
            Dataset::from_pairs(
                &[(0.0, 0.0), (10.0, 1.5), (20.0, 2.8), (30.0, 4.2), (40.0, 5.5)],
                AxisConfig::new(50.0, 6.0, 10.0, 1.0),
                unused_fit,
            ),
        ),
        (
            "step5",
            Dataset::from_pairs(
                &[(5.0, 1.0), (10.0, 2.3), (15.0, 2.8), (20.0, 3.5), (25.0, 4.0), (30.0, 5.2)],
                AxisConfig::new(35.0, 6.0, 5.0, 1.0),
                FitSpec::segment(INDIGO, (0.0, 0.5), (35.0, 5.5)),
            ),
        ),
        (
            "faq1",
            Dataset::from_pairs(
                &[(0.0, 0.5), (1.0, 1.8), (2.0, 2.2), (3.0, 3.6), (4.0, 3.9), (5.0, 5.2)],
                AxisConfig::new(5.5, 6.0, 0.5, 1.0),
                FitSpec::segment(INDIGO, (0.0, 0.2), (5.5, 5.5)),
            ),
        ),
        (
            "faq2a",
            Dataset::from_pairs(
                &[(0.5, 1.2), (1.5, 2.3), (2.5, 2.2), (3.5, 3.8), (4.5, 4.3)],
                AxisConfig::new(5.0, 5.0, 1.0, 1.0),
                FitSpec::segment(INDIGO, (0.0, 0.5), (5.0, 4.5)),
            ),
        ),
        (
            "faq2b",
            Dataset::from_pairs(
                &[(0.5, 1.5), (1.5, 2.5), (2.5, 3.0), (3.5, 4.0), (4.5, 4.8)],
                AxisConfig::new(5.0, 5.0, 1.0, 1.0),
                FitSpec::segment(INDIGO, (0.0, 0.0), (5.0, 3.5)),
            ),
        ),
        (
            "faq3",
            Dataset::from_pairs(
                &[(0.0, 0.0), (1.0, 0.8), (2.0, 1.9), (3.0, 2.8), (4.0, 4.2), (5.0, 4.8)],
                AxisConfig::new(6.0, 6.0, 1.0, 1.0),
                FitSpec::segment(INDIGO, (-0.2, -0.3), (5.5, 5.3)),
            ),
        ),
        (
            "faq4a",
            frame(10.0, 10.0, 1.0, 1.0, unused_fit),
        ),
        (
            "faq4b",
            Dataset::new(
                Vec::new(),
                AxisConfig::new(10.0, 10.0, 1.0, 1.0).with_labels("X variable (unit)", "Y variable (unit)"),
                unused_fit,
            ),
        ),
        (
            "faq5",
            Dataset::from_pairs(
                &[(0.0, 0.0), (1.0, 1.8), (2.0, 3.2), (3.0, 4.0), (4.0, 4.5), (5.0, 4.7)],
                AxisConfig::new(6.0, 5.0, 1.0, 1.0),
                FitSpec::bezier(INDIGO, (1.0, 2.0), (2.0, 4.0), (5.5, 4.8)),
            ),
        ),
        (
            "faq6",
            Dataset::from_pairs(
                &[(0.0, 4.0), (2.0, 6.5), (4.0, 8.8), (6.0, 11.2), (8.0, 14.0)],
                AxisConfig::new(10.0, 20.0, 1.25, 2.5).with_labels("Distance (km)", "Fare ($)"),
                FitSpec::segment(INDIGO, (0.0, 4.0), (9.0, 15.5)),
            ),
        ),
    ]
}
