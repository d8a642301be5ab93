//! Named filter-criteria presets.
//!
//! Templates are the only user data that outlives a session besides the UI
//! settings. The store owns the persisted representation exclusively: a
//! JSON array under a fixed key in the key-value backend, rewritten on
//! every save/delete. A malformed blob loads as an empty list (template
//! loss is non-critical), and persistence failures never propagate past a
//! log line.

use serde::{Deserialize, Serialize};

use crate::persist::kv::KeyValueStore;
use crate::report::criteria::FilterCriteria;

/// Fixed key the template blob lives under.
pub const TEMPLATE_STORE_KEY: &str = "exec_pro_report_templates";

/// A named snapshot of filter criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterTemplate {
    pub name: String,
    pub filters: FilterCriteria,
}

impl FilterTemplate {
    /// The stored criteria snapshot as an independent copy; later edits in
    /// the shell cannot reach back into the template.
    pub fn criteria(&self) -> FilterCriteria {
        self.filters.clone()
    }
}

/// Owns the saved templates and their persisted blob.
pub struct TemplateStore {
    templates: Vec<FilterTemplate>,
    backend: Box<dyn KeyValueStore>,
}

impl TemplateStore {
    /// Load templates from the backend. A missing or malformed blob yields
    /// an empty store.
    pub fn load(backend: Box<dyn KeyValueStore>) -> Self {
        let templates = match backend.get(TEMPLATE_STORE_KEY) {
            Some(blob) => match serde_json::from_str::<Vec<FilterTemplate>>(&blob) {
                Ok(list) => {
                    log::info!("TEMPLATES_LOADED count={}", list.len());
                    list
                }
                Err(e) => {
                    log::warn!("TEMPLATE_BLOB_INVALID error={}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        Self { templates, backend }
    }

    /// Templates in storage order.
    pub fn list(&self) -> &[FilterTemplate] {
        &self.templates
    }

    /// Append a template. A name that is empty after trimming is a logged
    /// no-op. Names are not deduplicated: saving twice under the same name
    /// keeps both entries, matching the dashboard's behavior.
    pub fn save(&mut self, name: &str, criteria: &FilterCriteria) {
        let name = name.trim();
        if name.is_empty() {
            log::warn!("TEMPLATE_SAVE_SKIPPED reason=empty_name");
            return;
        }

        self.templates.push(FilterTemplate {
            name: name.to_string(),
            filters: criteria.clone(),
        });
        log::info!("TEMPLATE_SAVED name={} count={}", name, self.templates.len());
        self.persist();
    }

    /// Remove every template with a matching name. An unknown name is a
    /// no-op.
    pub fn delete(&mut self, name: &str) {
        let before = self.templates.len();
        self.templates.retain(|t| t.name != name);
        let removed = before - self.templates.len();
        if removed > 0 {
            log::info!("TEMPLATE_DELETED name={} removed={}", name, removed);
            self.persist();
        }
    }

    fn persist(&mut self) {
        let blob = match serde_json::to_string(&self.templates) {
            Ok(b) => b,
            Err(e) => {
                log::error!("TEMPLATE_SERIALIZE_FAILED error={}", e);
                return;
            }
        };
        if let Err(e) = self.backend.set(TEMPLATE_STORE_KEY, &blob) {
            log::error!("TEMPLATE_PERSIST_FAILED error={}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::kv::{KeyValueStore, MemoryStore};
    use crate::report::criteria::ALL;

    fn brasil_pending() -> FilterCriteria {
        FilterCriteria {
            start_date: String::new(),
            end_date: String::new(),
            country: "Brasil".to_string(),
            service: ALL.to_string(),
            status: "Pending".to_string(),
        }
    }

    #[test]
    fn test_save_and_list_in_storage_order() {
        let mut store = TemplateStore::load(Box::new(MemoryStore::new()));
        store.save("Brasil pendentes", &brasil_pending());
        store.save("Tudo", &FilterCriteria::default());
        let names: Vec<&str> = store.list().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Brasil pendentes", "Tudo"]);
    }

    #[test]
    fn test_whitespace_name_is_a_noop() {
        let mut store = TemplateStore::load(Box::new(MemoryStore::new()));
        store.save("  ", &brasil_pending());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_name_is_trimmed_on_save() {
        let mut store = TemplateStore::load(Box::new(MemoryStore::new()));
        store.save("  Brasil  ", &brasil_pending());
        assert_eq!(store.list()[0].name, "Brasil");
    }

    #[test]
    fn test_duplicate_names_are_kept_and_deleted_together() {
        let mut store = TemplateStore::load(Box::new(MemoryStore::new()));
        store.save("Brasil", &brasil_pending());
        store.save("Brasil", &FilterCriteria::default());
        assert_eq!(store.list().len(), 2);

        store.delete("Brasil");
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_delete_unknown_name_is_a_noop() {
        let mut store = TemplateStore::load(Box::new(MemoryStore::new()));
        store.save("Brasil", &brasil_pending());
        store.delete("México");
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_criteria_returns_an_independent_copy() {
        let mut store = TemplateStore::load(Box::new(MemoryStore::new()));
        store.save("Brasil", &brasil_pending());
        let mut copy = store.list()[0].criteria();
        copy.country = "Chile".to_string();
        assert_eq!(store.list()[0].filters.country, "Brasil");
    }

    #[test]
    fn test_blob_round_trip_through_backend() {
        let mut backend = MemoryStore::new();
        {
            let mut store = TemplateStore::load(Box::new(MemoryStore::new()));
            store.save("Brasil", &brasil_pending());
            let blob = serde_json::to_string(store.list()).unwrap();
            backend.set(TEMPLATE_STORE_KEY, &blob).unwrap();
        }
        let reloaded = TemplateStore::load(Box::new(backend));
        assert_eq!(reloaded.list().len(), 1);
        assert_eq!(reloaded.list()[0].filters.country, "Brasil");
    }

    #[test]
    fn test_malformed_blob_loads_empty() {
        let mut backend = MemoryStore::new();
        backend.set(TEMPLATE_STORE_KEY, "][ not a list").unwrap();
        let store = TemplateStore::load(Box::new(backend));
        assert!(store.list().is_empty());
    }
}
