//! Mock dataset seeding.
//!
//! The dashboard runs entirely on in-memory mock data; this module builds
//! the seed roster and cases. Start/end timestamps are minted relative to
//! "now" so the imminence window in the dashboard feed stays meaningful.

use chrono::{Duration, Local};

use crate::store::case_store::CaseStore;
use crate::store::models::{
    ArmorType, AvailabilityStatus, Case, CaseStatus, PaymentMethod, Personnel, PersonnelRole,
    ServiceKind, Vehicle, VehicleType,
};

/// Local-naive ISO timestamp a number of minutes from now.
fn relative_stamp(minutes_ahead: i64) -> String {
    (Local::now().naive_local() + Duration::minutes(minutes_ahead))
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

fn vehicle(
    id: &str,
    model: &str,
    vehicle_type: VehicleType,
    armor: ArmorType,
    plate: &str,
    partner: &str,
    status: AvailabilityStatus,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        model: model.to_string(),
        vehicle_type,
        armor,
        plate: plate.to_string(),
        partner: partner.to_string(),
        status,
    }
}

fn person(
    id: &str,
    name: &str,
    role: PersonnelRole,
    document: &str,
    partner: &str,
    status: AvailabilityStatus,
) -> Personnel {
    Personnel {
        id: id.to_string(),
        name: name.to_string(),
        role,
        document: document.to_string(),
        partner: partner.to_string(),
        status,
    }
}

/// Build a store populated with the standard mock dataset.
pub fn seed_store() -> CaseStore {
    let mut store = CaseStore::new();

    store.add_vehicle(vehicle(
        "v1",
        "Toyota Corolla",
        VehicleType::Sedan,
        ArmorType::Conventional,
        "ABC-1234",
        "Localiza Corp",
        AvailabilityStatus::Available,
    ));
    store.add_vehicle(vehicle(
        "v2",
        "Chevrolet Suburban",
        VehicleType::Suv,
        ArmorType::Armored,
        "SEC-001",
        "Pinkerton Global",
        AvailabilityStatus::OnMission,
    ));
    store.add_vehicle(vehicle(
        "v3",
        "Mercedes Sprinter",
        VehicleType::Van,
        ArmorType::Conventional,
        "TRN-999",
        "Hertz Exec",
        AvailabilityStatus::Available,
    ));
    store.add_vehicle(vehicle(
        "v4",
        "Volvo XC90",
        VehicleType::Suv,
        ArmorType::Armored,
        "PRO-101",
        "Guardian Logistics",
        AvailabilityStatus::Maintenance,
    ));

    store.add_personnel(person(
        "p1",
        "João Silva",
        PersonnelRole::Driver,
        "123.456.789-00",
        "Pinkerton Internal",
        AvailabilityStatus::Available,
    ));
    store.add_personnel(person(
        "p2",
        "Carlos Mendez",
        PersonnelRole::Driver,
        "987.654.321-11",
        "Mendez Transp",
        AvailabilityStatus::OnMission,
    ));
    store.add_personnel(person(
        "p3",
        "Ricardo Santos",
        PersonnelRole::Agent,
        "555.444.333-22",
        "Pinkerton Security",
        AvailabilityStatus::Available,
    ));
    store.add_personnel(person(
        "p4",
        "Elena Gomez",
        PersonnelRole::Agent,
        "111.222.333-44",
        "Elite Guard",
        AvailabilityStatus::Available,
    ));

    // Imminent: starts in 90 minutes.
    store.add_case(Case {
        id: "c1".to_string(),
        project_number: "EP-10023".to_string(),
        client_name: "Global Corp CEO".to_string(),
        service: ServiceKind::Daily,
        vehicle_id: "v2".to_string(),
        driver_id: "p1".to_string(),
        agent_id: Some("p3".to_string()),
        has_agent: true,
        start_date_time: relative_stamp(90),
        end_date_time: relative_stamp(12 * 60),
        country: "Brasil".to_string(),
        cities: vec!["São Paulo".to_string()],
        city: "São Paulo".to_string(),
        hotel: Some("Hotel Unique".to_string()),
        agenda: Some("Board meeting downtown, dinner at Itaim Bibi".to_string()),
        payment_method: PaymentMethod::PurchaseOrder,
        card_type: None,
        passenger_email: "ceo@globalcorp.com".to_string(),
        passenger_phone: "+55 11 99999-9999".to_string(),
        cost: 1200.0,
        revenue: 2500.0,
        status: CaseStatus::InProgress,
        notes: None,
    });

    // Outside the imminence window.
    store.add_case(Case {
        id: "c2".to_string(),
        project_number: "EP-10024".to_string(),
        client_name: "Tech Venture Partner".to_string(),
        service: ServiceKind::Transfer,
        vehicle_id: "v1".to_string(),
        driver_id: "p2".to_string(),
        agent_id: None,
        has_agent: false,
        start_date_time: relative_stamp(4 * 60),
        end_date_time: relative_stamp(6 * 60),
        country: "Brasil".to_string(),
        cities: vec!["Rio de Janeiro".to_string()],
        city: "GIG Airport".to_string(),
        hotel: None,
        agenda: None,
        payment_method: PaymentMethod::CreditCard,
        card_type: Some("Visa".to_string()),
        passenger_email: "partner@techv.com".to_string(),
        passenger_phone: "+55 21 98888-7777".to_string(),
        cost: 300.0,
        revenue: 850.0,
        status: CaseStatus::Pending,
        notes: None,
    });

    // Imminent: starts in 30 minutes.
    store.add_case(Case {
        id: "c3".to_string(),
        project_number: "EP-10025".to_string(),
        client_name: "WBC Executive".to_string(),
        service: ServiceKind::Daily,
        vehicle_id: "v4".to_string(),
        driver_id: "p1".to_string(),
        agent_id: Some("p4".to_string()),
        has_agent: true,
        start_date_time: relative_stamp(30),
        end_date_time: relative_stamp(8 * 60),
        country: "México".to_string(),
        cities: vec!["CDMX".to_string()],
        city: "Polanco".to_string(),
        hotel: Some("Hotel Presidente Polanco".to_string()),
        agenda: None,
        payment_method: PaymentMethod::PurchaseOrder,
        card_type: None,
        passenger_email: "exec@wbc.mx".to_string(),
        passenger_phone: "+52 55 1234 5678".to_string(),
        cost: 1500.0,
        revenue: 3200.0,
        status: CaseStatus::Pending,
        notes: None,
    });

    store
}
