// File: crates/graph-core/src/panels.rs
// Summary: Tab group (exactly one active panel) and accordion (at most one open item) state.

/// Mutually exclusive panels. Before the first activation no panel is active;
/// afterwards exactly one is.
#[derive(Clone, Debug, Default)]
pub struct TabGroup {
    panels: Vec<String>,
    active: Option<usize>,
}

impl TabGroup {
    pub fn new<I, T>(panels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self { panels: panels.into_iter().map(Into::into).collect(), active: None }
    }

    /// Same as `new`, with the first panel already active.
    pub fn with_first_active<I, T>(panels: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut t = Self::new(panels);
        if !t.panels.is_empty() {
            t.active = Some(0);
        }
        t
    }

    /// Activate `id`, deactivating every sibling. Unknown ids leave the group untouched.
    pub fn activate(&mut self, id: &str) -> bool {
        match self.panels.iter().position(|p| p == id) {
            Some(i) => {
                self.active = Some(i);
                true
            }
            None => {
                log::debug!("no panel '{id}' in tab group");
                false
            }
        }
    }

    /// Activate the panel `offset` positions after the current one (wrapping).
    pub fn cycle(&mut self, offset: isize) -> Option<&str> {
        if self.panels.is_empty() {
            return None;
        }
        let n = self.panels.len() as isize;
        let cur = self.active.map(|i| i as isize).unwrap_or(-1);
        let next = (cur + offset).rem_euclid(n) as usize;
        self.active = Some(next);
        self.active()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.panels[i].as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    pub fn panels(&self) -> &[String] {
        &self.panels
    }
}

/// Expandable items where opening one closes the others.
#[derive(Clone, Debug, Default)]
pub struct Accordion {
    items: Vec<String>,
    open: Option<usize>,
}

impl Accordion {
    /// `default_open` names the item that starts expanded, if any.
    pub fn new<I, T>(items: I, default_open: Option<&str>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let open = default_open.and_then(|d| items.iter().position(|i| i == d));
        Self { items, open }
    }

    /// Toggle `id`: closes every sibling, then opens `id` unless it was the open one.
    /// Returns whether `id` is open afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(i) = self.items.iter().position(|it| it == id) else {
            log::debug!("no accordion item '{id}'");
            return false;
        };
        self.open = if self.open == Some(i) { None } else { Some(i) };
        self.open.is_some()
    }

    pub fn open_item(&self) -> Option<&str> {
        self.open.map(|i| self.items[i].as_str())
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_item() == Some(id)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}
