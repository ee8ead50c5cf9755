// File: crates/graph-core/src/controller.rs
// Summary: Interaction controller; per-scenario visibility flags, control labels, practice marks and redraws.
// Notes:
// - Datasets are only ever read from the shared Registry. The controller owns
//   the mutable side: visibility, labels, marks, and the mounted surfaces.
// - A scenario without a mounted surface still tracks state; its redraws are skipped.

use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{GraphError, Result};
use crate::geometry::PlotRect;
use crate::registry::{Registry, PRACTICE, SCENARIOS};
use crate::render::{render, render_marks, RenderOptions, VisibilityState};
use crate::surface::Surface;
use crate::types::{Margins, PixelPoint};

/// A learner click on the practice surface, kept in raw pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UserMark {
    pub at: PixelPoint,
}

/// Texts a toggle control cycles between.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelSet {
    pub show_points: String,
    pub hide_points: String,
    pub show_line: String,
    pub hide_line: String,
}

impl Default for LabelSet {
    fn default() -> Self {
        Self {
            show_points: "Show Points".into(),
            hide_points: "Hide Points".into(),
            show_line: "Show Best-Fit Line".into(),
            hide_line: "Hide Best-Fit Line".into(),
        }
    }
}

impl LabelSet {
    fn points_for(&self, shown: bool) -> &str {
        if shown { &self.hide_points } else { &self.show_points }
    }
    fn line_for(&self, shown: bool) -> &str {
        if shown { &self.hide_line } else { &self.show_line }
    }
}

/// Current text of the two toggle controls of a scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlLabels {
    pub points: String,
    pub line: String,
}

impl ControlLabels {
    fn initial(set: &LabelSet) -> Self {
        Self { points: set.show_points.clone(), line: set.show_line.clone() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    Points,
    Line,
    Reset,
}

impl FromStr for ControlAction {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "points" => Ok(Self::Points),
            "line" => Ok(Self::Line),
            "reset" => Ok(Self::Reset),
            other => Err(GraphError::UnknownAction(other.to_string())),
        }
    }
}

/// A control as found on the page: `{action, scenario}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Control {
    pub action: ControlAction,
    pub scenario: String,
}

impl Control {
    pub fn new(action: ControlAction, scenario: impl Into<String>) -> Self {
        Self { action, scenario: scenario.into() }
    }

    /// Build from the raw `action` / `scenario` attribute pair.
    pub fn parse(action: &str, scenario: &str) -> Result<Self> {
        Ok(Self::new(action.parse()?, scenario))
    }
}

pub struct ScenarioSlot<S> {
    pub visibility: VisibilityState,
    pub labels: ControlLabels,
    pub marks: Vec<UserMark>,
    pub options: RenderOptions,
    label_set: LabelSet,
    /// Clicks strictly inside these margins become marks; `None` takes no marks.
    click_margins: Option<Margins>,
    surface: Option<S>,
}

impl<S> ScenarioSlot<S> {
    fn new(options: RenderOptions, label_set: LabelSet, click_margins: Option<Margins>) -> Self {
        Self {
            visibility: VisibilityState::HIDDEN,
            labels: ControlLabels::initial(&label_set),
            marks: Vec::new(),
            options,
            label_set,
            click_margins,
            surface: None,
        }
    }

    /// Slot for a scenario tab: placeholder text, intercept callout, no marks.
    pub fn scenario(options: RenderOptions) -> Self {
        Self::new(options, LabelSet::default(), None)
    }

    /// Slot for the free-draw practice exercise.
    pub fn practice(base: RenderOptions) -> Self {
        let options = RenderOptions {
            margins: Margins::new(60, 30, 30, 60)
                .with_axis_reach(50, 10)
                .with_grid_reach(60, 20)
                .with_arrow_gap(10),
            placeholder: None,
            highlight_intercept: false,
            accent_titles: true,
            ..base
        };
        let labels = LabelSet { hide_line: "Hide Line".into(), ..LabelSet::default() };
        Self::new(options, labels, Some(Margins::new(60, 20, 60, 60)))
    }
}

pub struct Controller<S: Surface> {
    registry: Arc<Registry>,
    slots: IndexMap<String, ScenarioSlot<S>>,
}

impl<S: Surface> Controller<S> {
    /// Controller with a slot for every scenario tab and the practice exercise
    /// that the registry knows about, all rendered with `base` options.
    pub fn new(registry: Arc<Registry>, base: RenderOptions) -> Self {
        let mut slots = IndexMap::new();
        for id in SCENARIOS {
            if registry.contains(id) {
                slots.insert(id.to_string(), ScenarioSlot::scenario(base.clone()));
            }
        }
        if registry.contains(PRACTICE) {
            slots.insert(PRACTICE.to_string(), ScenarioSlot::practice(base));
        }
        Self { registry, slots }
    }

    pub fn slot(&self, id: &str) -> Result<&ScenarioSlot<S>> {
        self.slots.get(id).ok_or_else(|| GraphError::NotFound(id.to_string()))
    }

    fn slot_mut(&mut self, id: &str) -> Result<&mut ScenarioSlot<S>> {
        self.slots.get_mut(id).ok_or_else(|| GraphError::NotFound(id.to_string()))
    }

    pub fn visibility(&self, id: &str) -> Result<VisibilityState> {
        Ok(self.slot(id)?.visibility)
    }

    pub fn labels(&self, id: &str) -> Result<&ControlLabels> {
        Ok(&self.slot(id)?.labels)
    }

    pub fn marks(&self, id: &str) -> Result<&[UserMark]> {
        Ok(&self.slot(id)?.marks)
    }

    /// Attach a drawing surface to `id` and paint its current state.
    pub fn mount(&mut self, id: &str, surface: S) -> Result<()> {
        self.slot_mut(id)?.surface = Some(surface);
        self.redraw(id)?;
        Ok(())
    }

    pub fn surface(&self, id: &str) -> Option<&S> {
        self.slots.get(id).and_then(|s| s.surface.as_ref())
    }

    pub fn surface_mut(&mut self, id: &str) -> Option<&mut S> {
        self.slots.get_mut(id).and_then(|s| s.surface.as_mut())
    }

    /// Flip point visibility; returns the new value.
    pub fn toggle_show_points(&mut self, id: &str) -> Result<bool> {
        let slot = self.slot_mut(id)?;
        slot.visibility.show_points = !slot.visibility.show_points;
        let shown = slot.visibility.show_points;
        slot.labels.points = slot.label_set.points_for(shown).to_string();
        self.redraw(id)?;
        Ok(shown)
    }

    /// Flip fit-line visibility; returns the new value.
    pub fn toggle_show_line(&mut self, id: &str) -> Result<bool> {
        let slot = self.slot_mut(id)?;
        slot.visibility.show_line = !slot.visibility.show_line;
        let shown = slot.visibility.show_line;
        slot.labels.line = slot.label_set.line_for(shown).to_string();
        self.redraw(id)?;
        Ok(shown)
    }

    /// Hide everything, restore control labels and drop any practice marks.
    pub fn reset(&mut self, id: &str) -> Result<()> {
        let slot = self.slot_mut(id)?;
        slot.visibility = VisibilityState::HIDDEN;
        slot.labels = ControlLabels::initial(&slot.label_set);
        slot.marks.clear();
        self.redraw(id)?;
        Ok(())
    }

    /// Record a click at `at` on the practice surface of `id`.
    ///
    /// Returns `Ok(true)` when a mark was added. Clicks outside the click area,
    /// on scenarios that do not take marks, or with no surface mounted are ignored.
    pub fn add_user_mark(&mut self, id: &str, at: PixelPoint) -> Result<bool> {
        let slot = self.slot_mut(id)?;
        let Some(margins) = slot.click_margins else {
            return Ok(false);
        };
        let Some(surface) = slot.surface.as_ref() else {
            log::debug!("click on '{id}' ignored: no surface mounted");
            return Ok(false);
        };
        let (w, h) = surface.size();
        if !PlotRect::interior(w, h, &margins).contains(at) {
            log::debug!("click at ({}, {}) outside the click area of '{id}'", at.x, at.y);
            return Ok(false);
        }
        slot.marks.push(UserMark { at });
        self.redraw(id)?;
        Ok(true)
    }

    pub fn dispatch(&mut self, control: &Control) -> Result<()> {
        let id = control.scenario.as_str();
        match control.action {
            ControlAction::Points => self.toggle_show_points(id).map(drop),
            ControlAction::Line => self.toggle_show_line(id).map(drop),
            ControlAction::Reset => self.reset(id),
        }
    }

    /// Repaint `id` if it has a surface. Returns whether anything was drawn.
    pub fn redraw(&mut self, id: &str) -> Result<bool> {
        let dataset = self.registry.get(id)?;
        let slot = self.slots.get_mut(id).ok_or_else(|| GraphError::NotFound(id.to_string()))?;
        let Some(surface) = slot.surface.as_mut() else {
            log::debug!("no surface mounted for '{id}', skipping redraw");
            return Ok(false);
        };
        render(surface, dataset, slot.visibility, &slot.options);
        render_marks(surface, &slot.marks, &slot.options.theme);
        Ok(true)
    }
}
