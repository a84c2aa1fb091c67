use crate::config::TabIds;
use crate::error::PageError;
use crate::host::Host;

pub const ACTIVE_CLASS: &str = "active";

/// Tabbed panel; exactly one panel is shown once a tab is selected.
#[derive(Debug)]
pub struct Tabs<H> {
    host: H,
    tabs: Vec<TabIds>,
    selected: Option<usize>,
}

impl<H: Host> Tabs<H> {
    /// Creates the panel and selects the first tab, if any.
    pub fn new(host: H, tabs: Vec<TabIds>) -> Self {
        let mut panel = Self {
            host,
            tabs,
            selected: None,
        };
        if !panel.tabs.is_empty() {
            panel.show(0);
        }
        panel
    }

    /// Selects the tab whose panel id is `name`.
    pub fn select(&mut self, name: &str) -> Result<(), PageError> {
        let index = self
            .tabs
            .iter()
            .position(|tab| tab.content == name)
            .ok_or_else(|| PageError::UnknownTab(name.to_string()))?;
        log::debug!("tab {} selected", name);
        self.show(index);
        Ok(())
    }

    /// Panel id of the selected tab.
    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|index| self.tabs[index].content.as_str())
    }

    fn show(&mut self, index: usize) {
        for tab in &self.tabs {
            self.host.set_visible(&tab.content, false);
            self.host.set_class(&tab.link, ACTIVE_CLASS, false);
        }
        let tab = &self.tabs[index];
        self.host.set_visible(&tab.content, true);
        self.host.set_class(&tab.link, ACTIVE_CLASS, true);
        self.selected = Some(index);
    }
}
