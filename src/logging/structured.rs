//! Structured logging utilities.
//!
//! Provides context-aware logging with the operation id (and, where
//! relevant, the case id) included in every log message.

use std::fmt;

use uuid::Uuid;

/// Logging context for one user-triggered operation (report run, export,
/// template edit).
#[derive(Debug, Clone)]
pub struct LogContext {
    pub op_id: String,
    pub case_id: Option<String>,
}

impl LogContext {
    /// Mint a context with a fresh short id, e.g. `report-3fa9c1d2`.
    pub fn new(kind: &str) -> Self {
        Self {
            op_id: format!("{}-{}", kind, &Uuid::new_v4().to_string()[..8]),
            case_id: None,
        }
    }

    pub fn with_case(&self, case_id: &str) -> Self {
        Self {
            op_id: self.op_id.clone(),
            case_id: Some(case_id.to_string()),
        }
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.case_id {
            Some(cid) => write!(f, "[op={}] [case={}]", self.op_id, cid),
            None => write!(f, "[op={}]", self.op_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_display() {
        let ctx = LogContext::new("report");
        assert!(format!("{}", ctx).starts_with("[op=report-"));

        let ctx_with_case = ctx.with_case("c1");
        assert!(format!("{}", ctx_with_case).ends_with("[case=c1]"));
    }

    #[test]
    fn test_op_ids_are_unique() {
        let a = LogContext::new("export");
        let b = LogContext::new("export");
        assert_ne!(a.op_id, b.op_id);
    }
}
