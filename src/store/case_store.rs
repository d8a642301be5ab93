//! In-memory case store.
//!
//! The only source of truth in the system: an insertion-ordered collection
//! of case records plus the vehicle and personnel rosters they reference.
//! The report/export paths only ever read from it; mutation happens through
//! the shell-facing methods below.

use crate::logging::structured::LogContext;
use crate::store::models::{Case, Personnel, Vehicle};

/// Owns all case, vehicle, and personnel records.
#[derive(Debug, Default)]
pub struct CaseStore {
    cases: Vec<Case>,
    vehicles: Vec<Vehicle>,
    personnel: Vec<Personnel>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All cases in insertion order. Filtering never re-sorts this.
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn personnel(&self) -> &[Personnel] {
        &self.personnel
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn personnel_by_id(&self, id: &str) -> Option<&Personnel> {
        self.personnel.iter().find(|p| p.id == id)
    }

    pub fn case(&self, id: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == id)
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn add_personnel(&mut self, person: Personnel) {
        self.personnel.push(person);
    }

    pub fn add_case(&mut self, case: Case) {
        log::info!(
            "CASE_ADDED case_id={} project={}",
            case.id,
            case.project_number
        );
        self.cases.push(case);
    }

    /// Overwrite the case with the same id. Returns false when no case
    /// matches; the shell treats that as a stale edit and re-renders.
    pub fn update_case(&mut self, case: Case) -> bool {
        match self.cases.iter_mut().find(|c| c.id == case.id) {
            Some(slot) => {
                log::info!("CASE_UPDATED case_id={} status={}", case.id, case.status.as_str());
                *slot = case;
                true
            }
            None => {
                log::warn!("CASE_UPDATE_MISS case_id={}", case.id);
                false
            }
        }
    }

    /// Remove the case with the given id. Returns whether anything was
    /// removed; removing an unknown id is a logged no-op.
    pub fn remove_case(&mut self, ctx: &LogContext, id: &str) -> bool {
        let before = self.cases.len();
        self.cases.retain(|c| c.id != id);
        let removed = self.cases.len() < before;
        if removed {
            log::info!("{} CASE_REMOVED case_id={}", ctx, id);
        } else {
            log::warn!("{} CASE_REMOVE_MISS case_id={}", ctx, id);
        }
        removed
    }
}
