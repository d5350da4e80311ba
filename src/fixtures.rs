//! Demo dataset: the three demo accounts and a small condominium.
//!
//! Compiled for tests and under the `test-utils` feature.

use crate::access::InMemoryDirectory;
use crate::records::{
    Announcement, AnnouncementKind, Delivery, DeliveryStatus, Employee, JobTitle, Occurrence, OccurrenceKind,
    OccurrenceStatus, Priority, Resident, Shift, Unit, UnitKind, UnitStatus, Visitor, VisitorStatus,
};
use crate::types::{Actor, Role};

pub const ADMIN_EMAIL: &str = "admin@condominio.com";
pub const EMPLOYEE_EMAIL: &str = "portaria@condominio.com";
pub const RESIDENT_EMAIL: &str = "joao@email.com";

fn actor(id: &str, name: &str, email: &str, role: Role, phone: &str, created_at: &str) -> Actor {
    Actor {
        phone: Some(phone.to_string()),
        created_at: created_at.to_string(),
        ..Actor::new(id, name, email, role)
    }
}

pub fn demo_actors() -> Vec<Actor> {
    vec![
        actor("1", "Carlos Silva", ADMIN_EMAIL, Role::Admin, "(11) 99999-0001", "2024-01-01T00:00:00Z"),
        actor("2", "Maria Santos", EMPLOYEE_EMAIL, Role::Employee, "(11) 99999-0002", "2024-01-15T00:00:00Z"),
        Actor {
            unit_id: Some("unit-1".to_string()),
            ..actor("3", "João Oliveira", RESIDENT_EMAIL, Role::Resident, "(11) 99999-0003", "2024-02-01T00:00:00Z")
        },
    ]
}

pub fn demo_directory() -> InMemoryDirectory {
    InMemoryDirectory::new(demo_actors())
}

fn unit(id: &str, block: &str, number: &str, floor: i32, status: UnitStatus, residents: &[&str]) -> Unit {
    Unit {
        id: id.to_string(),
        block: block.to_string(),
        number: number.to_string(),
        floor,
        kind: UnitKind::Apartment,
        status,
        residents: residents.iter().map(|r| r.to_string()).collect(),
    }
}

pub fn units() -> Vec<Unit> {
    use UnitStatus::*;
    vec![
        unit("unit-1", "A", "101", 1, Occupied, &["res-1"]),
        unit("unit-2", "A", "102", 1, Occupied, &["res-2"]),
        unit("unit-3", "A", "201", 2, Vacant, &[]),
        unit("unit-4", "A", "202", 2, Occupied, &["res-3"]),
        unit("unit-5", "B", "101", 1, Occupied, &["res-4", "res-5"]),
        unit("unit-6", "B", "102", 1, Vacant, &[]),
        unit("unit-7", "B", "201", 2, Occupied, &["res-6"]),
        unit("unit-8", "B", "202", 2, Occupied, &["res-7"]),
    ]
}

/// A resident with generated contact data, for building datasets of any size.
pub fn resident(n: usize, name: &str, unit_id: &str, is_owner: bool) -> Resident {
    Resident {
        id: format!("res-{}", n),
        name: name.to_string(),
        email: format!("{}@email.com", name.split_whitespace().next().unwrap_or("morador").to_lowercase()),
        phone: format!("(11) 99999-{}", 1000 + n),
        cpf: format!("{:03}.456.789-00", n),
        unit_id: unit_id.to_string(),
        is_owner,
        is_active: true,
        created_at: "2024-02-01T00:00:00Z".to_string(),
    }
}

pub fn residents() -> Vec<Resident> {
    vec![
        Resident { email: RESIDENT_EMAIL.to_string(), ..resident(1, "João Oliveira", "unit-1", true) },
        resident(2, "Ana Costa", "unit-2", true),
        resident(3, "Pedro Lima", "unit-4", false),
        resident(4, "Carla Souza", "unit-5", true),
        resident(5, "Roberto Souza", "unit-5", false),
        resident(6, "Fernanda Alves", "unit-7", true),
        resident(7, "Lucas Ferreira", "unit-8", true),
    ]
}

/// `count` residents named "Morador 1" .. "Morador count".
pub fn numbered_residents(count: usize) -> Vec<Resident> {
    (1..=count).map(|n| resident(n, &format!("Morador {}", n), "unit-1", true)).collect()
}

pub fn employees() -> Vec<Employee> {
    let employee = |id: &str, name: &str, job: JobTitle, shift: Option<Shift>, is_active: bool| Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@condominio.com", name.split_whitespace().next().unwrap_or("staff").to_lowercase()),
        phone: "(11) 99999-2000".to_string(),
        cpf: "000.000.000-00".to_string(),
        job,
        shift,
        is_active,
        hire_date: "2023-06-15".to_string(),
    };
    vec![
        employee("emp-1", "Maria Santos", JobTitle::Doorman, Some(Shift::Morning), true),
        employee("emp-2", "Jose Ferreira", JobTitle::Doorman, Some(Shift::Afternoon), true),
        employee("emp-3", "Antonio Souza", JobTitle::Doorman, Some(Shift::Night), true),
        employee("emp-4", "Rosa Oliveira", JobTitle::Cleaner, Some(Shift::Morning), true),
        employee("emp-5", "Pedro Almeida", JobTitle::Maintenance, None, true),
        employee("emp-6", "Jorge Lima", JobTitle::Security, Some(Shift::Night), false),
    ]
}

pub fn visitors() -> Vec<Visitor> {
    let visitor = |id: &str, name: &str, unit_id: &str, unit_number: &str, pre_registered: bool, status: VisitorStatus, created_at: &str| Visitor {
        id: id.to_string(),
        name: name.to_string(),
        document: "111.222.333-44".to_string(),
        unit_id: unit_id.to_string(),
        unit_number: unit_number.to_string(),
        purpose: "Visita".to_string(),
        vehicle_plate: None,
        pre_registered,
        status,
        entry_time: "2025-01-30T09:00:00Z".to_string(),
        exit_time: None,
        created_at: created_at.to_string(),
    };
    vec![
        visitor("vis-1", "Paulo Mendes", "unit-1", "101", true, VisitorStatus::Inside, "2025-01-29T18:00:00Z"),
        visitor("vis-2", "Lucia Rodrigues", "unit-2", "102", false, VisitorStatus::Expected, "2025-01-30T10:00:00Z"),
        visitor("vis-3", "Marcos Pereira", "unit-5", "101-B", true, VisitorStatus::Inside, "2025-01-29T20:00:00Z"),
        visitor("vis-4", "Sandra Lima", "unit-4", "202", true, VisitorStatus::Left, "2025-01-28T10:00:00Z"),
        visitor("vis-5", "Ricardo Martins", "unit-7", "201-B", true, VisitorStatus::Expected, "2025-01-30T08:00:00Z"),
    ]
}

pub fn deliveries() -> Vec<Delivery> {
    let delivery = |id: &str, unit_number: &str, carrier: &str, tracking: Option<&str>, description: Option<&str>, status: DeliveryStatus| {
        Delivery {
            id: id.to_string(),
            unit_id: String::new(),
            unit_number: unit_number.to_string(),
            received_at: "2025-01-30T08:30:00Z".to_string(),
            received_by: "Maria Santos".to_string(),
            carrier: carrier.to_string(),
            tracking_code: tracking.map(str::to_string),
            description: description.map(str::to_string),
            status,
            picked_up_at: None,
            picked_up_by: None,
        }
    };
    use DeliveryStatus::*;
    vec![
        delivery("del-1", "101", "Correios", Some("BR123456789BR"), Some("Caixa pequena"), Pending),
        delivery("del-2", "202", "Mercado Livre", None, Some("Pacote medio"), Pending),
        Delivery {
            picked_up_at: Some("2025-01-29T18:30:00Z".to_string()),
            picked_up_by: Some("Carla Souza".to_string()),
            ..delivery("del-3", "101-B", "Amazon", Some("AMZ987654321"), Some("Caixa grande"), PickedUp)
        },
        delivery("del-4", "102", "Sedex", Some("SX111222333BR"), None, Pending),
        Delivery {
            picked_up_at: Some("2025-01-28T19:00:00Z".to_string()),
            picked_up_by: Some("Fernanda Alves".to_string()),
            ..delivery("del-5", "201-B", "Jadlog", None, Some("Envelope"), PickedUp)
        },
    ]
}

pub fn occurrences() -> Vec<Occurrence> {
    let occurrence = |id: &str, title: &str, kind: OccurrenceKind, priority: Priority, status: OccurrenceStatus, unit_id: Option<&str>, created_at: &str| Occurrence {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        kind,
        priority,
        status,
        reported_by: "2".to_string(),
        location: None,
        unit_id: unit_id.map(str::to_string),
        resolution: None,
        created_at: created_at.to_string(),
        resolved_at: None,
    };
    use OccurrenceKind::*;
    use OccurrenceStatus::*;
    vec![
        occurrence("occ-1", "Barulho excessivo", Complaint, Priority::Medium, Open, Some("unit-4"), "2025-01-29T23:30:00Z"),
        occurrence("occ-2", "Vazamento na garagem", Maintenance, Priority::High, InProgress, None, "2025-01-28T10:00:00Z"),
        occurrence("occ-3", "Porta do hall travada", Maintenance, Priority::Medium, Resolved, None, "2025-01-25T15:00:00Z"),
        occurrence("occ-4", "Pessoa suspeita", Security, Priority::High, Closed, None, "2025-01-20T21:00:00Z"),
        occurrence("occ-5", "Elevador com problema", Maintenance, Priority::High, Open, None, "2025-01-30T07:00:00Z"),
    ]
}

pub fn announcements() -> Vec<Announcement> {
    let announcement = |id: &str, title: &str, kind: AnnouncementKind, priority: Priority, created_at: &str| Announcement {
        id: id.to_string(),
        title: title.to_string(),
        content: String::new(),
        kind,
        priority,
        author_id: "1".to_string(),
        is_active: true,
        expires_at: None,
        created_at: created_at.to_string(),
    };
    vec![
        announcement("ann-1", "Manutenção do elevador", AnnouncementKind::Maintenance, Priority::High, "2025-01-28T10:00:00Z"),
        announcement("ann-2", "Assembleia Geral", AnnouncementKind::Event, Priority::Medium, "2025-01-25T14:00:00Z"),
        announcement("ann-3", "Horário da piscina", AnnouncementKind::General, Priority::Low, "2025-01-20T09:00:00Z"),
    ]
}
