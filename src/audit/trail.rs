//! Audit trail.
//!
//! Append-only record of user actions the Audit view renders. Entries are
//! process-local like everything else; "immutable" here means the module
//! exposes no way to edit or remove an entry once recorded.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One audited action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: String,
    pub timestamp: String,
    pub user_id: String,
    pub action: String,
    pub details: String,
}

/// In-memory, append-only list of audit entries.
#[derive(Debug, Default)]
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// A trail pre-populated with the mock entries the dashboard ships with.
    pub fn seed_mock() -> Self {
        let mut trail = Self::new();
        trail.record("Admin", "CASE_CREATED", "Novo caso EP-10024 criado.");
        trail.record("Manager", "PII_REVEALED", "Documento do motorista p1 acessado.");
        trail
    }

    /// Append an entry stamped with the current local time.
    pub fn record(&mut self, user_id: &str, action: &str, details: &str) {
        let entry = AuditEntry {
            id: format!("audit-{}", &Uuid::new_v4().to_string()[..8]),
            timestamp: Local::now()
                .naive_local()
                .format("%Y-%m-%dT%H:%M:%S")
                .to_string(),
            user_id: user_id.to_string(),
            action: action.to_string(),
            details: details.to_string(),
        };
        log::info!(
            "AUDIT_APPEND id={} user={} action={}",
            entry.id,
            entry.user_id,
            entry.action
        );
        self.entries.push(entry);
    }

    /// All entries in recording order.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Entries whose timestamp falls inside the inclusive ISO-prefix
    /// bounds. Empty bounds are unbounded; comparison is lexicographic on
    /// the timestamp strings, same as the case filter.
    pub fn in_range(&self, start: &str, end: &str) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .filter(|e| {
                (start.is_empty() || e.timestamp.as_str() >= start)
                    && (end.is_empty() || e.timestamp.as_str() <= end)
            })
            .collect()
    }
}
