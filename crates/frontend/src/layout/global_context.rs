use contracts::shared::presentation::Icon;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Дашборды приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dashboard {
    Content,
    Students,
    MyTasks,
    DepartmentTasks,
    Leaves,
    Timesheets,
    Documents,
    Users,
    ApiEndpoints,
}

impl Dashboard {
    pub const ALL: &'static [Dashboard] = &[
        Dashboard::Content,
        Dashboard::Students,
        Dashboard::MyTasks,
        Dashboard::DepartmentTasks,
        Dashboard::Leaves,
        Dashboard::Timesheets,
        Dashboard::Documents,
        Dashboard::Users,
        Dashboard::ApiEndpoints,
    ];

    /// Ключ в query string `?active=`
    pub fn key(self) -> &'static str {
        match self {
            Dashboard::Content => "content",
            Dashboard::Students => "students",
            Dashboard::MyTasks => "my_tasks",
            Dashboard::DepartmentTasks => "department_tasks",
            Dashboard::Leaves => "leaves",
            Dashboard::Timesheets => "timesheets",
            Dashboard::Documents => "documents",
            Dashboard::Users => "users",
            Dashboard::ApiEndpoints => "api_endpoints",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Dashboard::Content => "Content",
            Dashboard::Students => "Students",
            Dashboard::MyTasks => "My Tasks",
            Dashboard::DepartmentTasks => "Department Tasks",
            Dashboard::Leaves => "Leaves",
            Dashboard::Timesheets => "Timesheets",
            Dashboard::Documents => "Documents",
            Dashboard::Users => "Users",
            Dashboard::ApiEndpoints => "API Endpoints",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Dashboard::Content => Icon::Book,
            Dashboard::Students => Icon::Users,
            Dashboard::MyTasks => Icon::Clipboard,
            Dashboard::DepartmentTasks => Icon::Building,
            Dashboard::Leaves => Icon::Calendar,
            Dashboard::Timesheets => Icon::Clock,
            Dashboard::Documents => Icon::FileText,
            Dashboard::Users => Icon::UserCheck,
            Dashboard::ApiEndpoints => Icon::Code,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Dashboard>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Dashboard::Content),
            left_open: RwSignal::new(true),
        }
    }

    /// Активный дашборд читается из `?active=` и записывается обратно при смене
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(dashboard) = params.get("active").and_then(|k| Dashboard::from_key(k)) {
            self.activate(dashboard);
        }

        let this = *self;
        Effect::new(move |_| {
            let active_key = this.active.get().key();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "active".to_string(),
                active_key.to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, dashboard: Dashboard) {
        leptos::logging::log!("activate dashboard: '{}'", dashboard.key());
        self.active.set(dashboard);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_parse_back() {
        for dashboard in Dashboard::ALL {
            assert_eq!(Dashboard::from_key(dashboard.key()), Some(*dashboard));
        }
        let mut keys: Vec<&str> = Dashboard::ALL.iter().map(|d| d.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Dashboard::ALL.len());
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(Dashboard::from_key("reports"), None);
    }
}
