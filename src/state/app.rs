//! Application state and UI settings.
//!
//! The shell's top-level state lives in one explicit struct rather than
//! ambient globals: the active view plus the persisted UI preferences.
//! Settings are loaded once at startup and written back on every change;
//! a malformed or missing blob falls back to defaults.

use serde::{Deserialize, Serialize};

use crate::persist::kv::KeyValueStore;

/// Fixed key the settings blob lives under.
pub const SETTINGS_KEY: &str = "exec_pro_settings";

/// Sidebar views of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Dashboard,
    Operations,
    Fleet,
    Team,
    Audit,
    Reports,
    Settings,
}

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Pt,
    Es,
}

/// Which dashboard sections and metric cards are visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPrefs {
    pub show_chart: bool,
    pub show_agenda: bool,
    pub active_metrics: Vec<String>,
}

impl Default for DashboardPrefs {
    fn default() -> Self {
        Self {
            show_chart: true,
            show_agenda: true,
            active_metrics: vec![
                "activeCases".to_string(),
                "revenue".to_string(),
                "driversOnline".to_string(),
                "alerts".to_string(),
            ],
        }
    }
}

/// Persisted UI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub dark_mode: bool,
    pub lang: Lang,
    pub outlook_sync: bool,
    #[serde(default)]
    pub dashboard: DashboardPrefs,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            lang: Lang::Pt,
            outlook_sync: false,
            dashboard: DashboardPrefs::default(),
        }
    }
}

/// Top-level application state the shell threads through its views.
pub struct AppState {
    settings: AppSettings,
    active_view: View,
    backend: Box<dyn KeyValueStore>,
}

impl AppState {
    /// Load settings from the backend; defaults on a missing or malformed
    /// blob.
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let settings = match backend.get(SETTINGS_KEY) {
            Some(blob) => match serde_json::from_str::<AppSettings>(&blob) {
                Ok(s) => {
                    log::info!("SETTINGS_LOADED lang={:?} dark_mode={}", s.lang, s.dark_mode);
                    s
                }
                Err(e) => {
                    log::warn!("SETTINGS_BLOB_INVALID error={}", e);
                    AppSettings::default()
                }
            },
            None => AppSettings::default(),
        };

        Self {
            settings,
            active_view: View::Dashboard,
            backend,
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// View switching is session state only; it is never persisted.
    pub fn set_active_view(&mut self, view: View) {
        self.active_view = view;
    }

    /// Apply a settings edit and write the blob back. Persistence failures
    /// are logged and swallowed; the in-memory settings always win.
    pub fn update_settings(&mut self, edit: impl FnOnce(&mut AppSettings)) {
        edit(&mut self.settings);
        let blob = match serde_json::to_string(&self.settings) {
            Ok(b) => b,
            Err(e) => {
                log::error!("SETTINGS_SERIALIZE_FAILED error={}", e);
                return;
            }
        };
        if let Err(e) = self.backend.set(SETTINGS_KEY, &blob) {
            log::error!("SETTINGS_PERSIST_FAILED error={}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::kv::{KeyValueStore, MemoryStore};

    #[test]
    fn test_defaults_without_blob() {
        let state = AppState::load(Box::new(MemoryStore::new()));
        assert_eq!(state.active_view(), View::Dashboard);
        assert_eq!(state.settings().lang, Lang::Pt);
        assert!(!state.settings().dark_mode);
        assert!(state.settings().dashboard.show_agenda);
    }

    #[test]
    fn test_malformed_blob_falls_back_to_defaults() {
        let mut backend = MemoryStore::new();
        backend.set(SETTINGS_KEY, "{{nope").unwrap();
        let state = AppState::load(Box::new(backend));
        assert_eq!(state.settings(), &AppSettings::default());
    }

    #[test]
    fn test_update_persists_blob() {
        let mut state = AppState::load(Box::new(MemoryStore::new()));
        state.update_settings(|s| {
            s.dark_mode = true;
            s.lang = Lang::Es;
        });
        assert!(state.settings().dark_mode);

        // The written blob parses back to the same settings.
        let blob = serde_json::to_string(state.settings()).unwrap();
        let parsed: AppSettings = serde_json::from_str(&blob).unwrap();
        assert_eq!(&parsed, state.settings());
        assert_eq!(parsed.lang, Lang::Es);
    }

    #[test]
    fn test_view_switch_is_not_persisted() {
        let mut state = AppState::load(Box::new(MemoryStore::new()));
        state.set_active_view(View::Reports);
        assert_eq!(state.active_view(), View::Reports);
    }
}
