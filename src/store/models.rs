//! Record models for the case store.
//!
//! These models mirror the records the presentation shell renders: cases,
//! the vehicle fleet, and the personnel roster. Status transitions are not
//! enforced anywhere; the shell overwrites fields directly.

use serde::{Deserialize, Serialize};

/// Kind of protective-transport engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    Transfer,
    Daily,
}

impl ServiceKind {
    pub fn as_str(&self) -> &str {
        match self {
            ServiceKind::Transfer => "Transfer",
            ServiceKind::Daily => "Daily",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Transfer" => Some(ServiceKind::Transfer),
            "Daily" => Some(ServiceKind::Daily),
            _ => None,
        }
    }
}

/// Case lifecycle status. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl CaseStatus {
    pub fn as_str(&self) -> &str {
        match self {
            CaseStatus::Pending => "Pending",
            CaseStatus::InProgress => "In Progress",
            CaseStatus::Completed => "Completed",
            CaseStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(CaseStatus::Pending),
            "In Progress" => Some(CaseStatus::InProgress),
            "Completed" => Some(CaseStatus::Completed),
            "Cancelled" => Some(CaseStatus::Cancelled),
            _ => None,
        }
    }
}

/// How the client pays for the engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "PO")]
    PurchaseOrder,
    #[serde(rename = "Credit Card")]
    CreditCard,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethod::PurchaseOrder => "PO",
            PaymentMethod::CreditCard => "Credit Card",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Sedan,
    #[serde(rename = "SUV")]
    Suv,
    Minivan,
    Van,
}

impl VehicleType {
    pub fn as_str(&self) -> &str {
        match self {
            VehicleType::Sedan => "Sedan",
            VehicleType::Suv => "SUV",
            VehicleType::Minivan => "Minivan",
            VehicleType::Van => "Van",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArmorType {
    Conventional,
    Armored,
}

impl ArmorType {
    pub fn as_str(&self) -> &str {
        match self {
            ArmorType::Conventional => "Conventional",
            ArmorType::Armored => "Armored",
        }
    }
}

/// Availability of a vehicle or crew member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    #[serde(rename = "On Mission")]
    OnMission,
    Maintenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonnelRole {
    Driver,
    Agent,
}

/// A fleet vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub armor: ArmorType,
    pub plate: String,
    pub partner: String,
    pub status: AvailabilityStatus,
}

/// A driver or protection agent. The `document` field is PII; the shell
/// masks it for display via `security::pii`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personnel {
    pub id: String,
    pub name: String,
    pub role: PersonnelRole,
    pub document: String,
    pub partner: String,
    pub status: AvailabilityStatus,
}

/// One protective-transport engagement.
///
/// `start_date_time`/`end_date_time` are ISO-8601 local-naive strings and
/// are compared lexicographically throughout (see `report::filter`); they
/// are deliberately not parsed into calendar values on the filter path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub project_number: String,
    pub client_name: String,
    pub service: ServiceKind,

    // Assigned resources
    pub vehicle_id: String,
    pub driver_id: String,
    pub agent_id: Option<String>,
    pub has_agent: bool,

    // Schedule
    pub start_date_time: String,
    pub end_date_time: String,

    // Itinerary
    pub country: String,
    pub cities: Vec<String>,
    pub city: String,
    pub hotel: Option<String>,
    pub agenda: Option<String>,

    // Billing
    pub payment_method: PaymentMethod,
    pub card_type: Option<String>,

    // Passenger contact (PII)
    pub passenger_email: String,
    pub passenger_phone: String,

    // Financials (currency-agnostic)
    pub cost: f64,
    pub revenue: f64,

    pub status: CaseStatus,
    pub notes: Option<String>,
}

impl Case {
    /// Per-case margin: revenue minus cost. May be negative.
    pub fn margin(&self) -> f64 {
        self.revenue - self.cost
    }

    /// Payment method label for display/export: `"Credit Card (Visa)"`
    /// when a card type is recorded, else the bare method.
    pub fn payment_label(&self) -> String {
        match &self.card_type {
            Some(card) => format!("{} ({})", self.payment_method.as_str(), card),
            None => self.payment_method.as_str().to_string(),
        }
    }
}
