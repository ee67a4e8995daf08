use super::SubTab;

/// Вычисленные вкладки, активная вкладка и выбор на уровне ниже
/// (например, выбранный предмет или модуль).
#[derive(Debug, Clone, PartialEq)]
pub struct SubTabCursor<C> {
    tabs: Vec<SubTab>,
    active: Option<String>,
    child: Option<C>,
}

impl<C> Default for SubTabCursor<C> {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            child: None,
        }
    }
}

impl<C> SubTabCursor<C> {
    pub fn new(tabs: Vec<SubTab>) -> Self {
        let mut cursor = Self::default();
        cursor.replace_tabs(tabs);
        cursor
    }

    /// Новые вкладки (сменился родительский фильтр или источник):
    /// активна первая, выбор ниже сбрасывается
    pub fn replace_tabs(&mut self, tabs: Vec<SubTab>) {
        self.active = tabs.first().map(|t| t.id.clone());
        self.tabs = tabs;
        self.child = None;
    }

    /// Неизвестный id игнорируется
    pub fn select(&mut self, id: &str) -> bool {
        if !self.tabs.iter().any(|t| t.id == id) {
            return false;
        }
        if self.active.as_deref() != Some(id) {
            self.active = Some(id.to_string());
            self.child = None;
        }
        true
    }

    pub fn select_child(&mut self, child: C) {
        self.child = Some(child);
    }

    pub fn clear_child(&mut self) {
        self.child = None;
    }

    pub fn tabs(&self) -> &[SubTab] {
        &self.tabs
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_tab(&self) -> Option<&SubTab> {
        let id = self.active.as_deref()?;
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn child(&self) -> Option<&C> {
        self.child.as_ref()
    }
}
