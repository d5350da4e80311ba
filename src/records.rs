//!
//! Condominium records shown through the tabular browser, and the stock table
//! specs the dashboard screens use for them.
//!
//! Records arrive already filtered by role; nothing here makes access
//! decisions. The feeds (`resident_visitors`, `deliveries_with_status`) only
//! narrow a dataset to what one screen lists.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::table::{ColumnDef, TableSpec};
use crate::types::Actor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Apartment,
    Commercial,
    Parking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitStatus {
    Occupied,
    Vacant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub block: String,
    pub number: String,
    pub floor: i32,
    #[serde(rename = "type")]
    pub kind: UnitKind,
    pub status: UnitStatus,
    /// Resident ids.
    pub residents: Vec<String>,
}

impl Unit {
    /// "101 - Bloco A".
    pub fn display(&self) -> String {
        format!("{} - Bloco {}", self.number, self.block)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    pub unit_id: String,
    pub is_owner: bool,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobTitle {
    Doorman,
    Cleaner,
    Maintenance,
    Security,
    Admin,
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Doorman => "Porteiro",
            Self::Cleaner => "Limpeza",
            Self::Maintenance => "Manutencao",
            Self::Security => "Seguranca",
            Self::Admin => "Administrativo",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Morning => "Manha",
            Self::Afternoon => "Tarde",
            Self::Night => "Noite",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub cpf: String,
    #[serde(rename = "role")]
    pub job: JobTitle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<Shift>,
    pub is_active: bool,
    pub hire_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitorStatus {
    Pending,
    Inside,
    Left,
    Expected,
    Cancelled,
}

impl fmt::Display for VisitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "Pendente",
            Self::Inside => "No condominio",
            Self::Left => "Saiu",
            Self::Expected => "Aguardado",
            Self::Cancelled => "Cancelado",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: String,
    pub name: String,
    pub document: String,
    pub unit_id: String,
    pub unit_number: String,
    pub purpose: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_plate: Option<String>,
    pub pre_registered: bool,
    pub status: VisitorStatus,
    pub entry_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_time: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    PickedUp,
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "Aguardando retirada",
            Self::PickedUp => "Retirada",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: String,
    pub unit_id: String,
    pub unit_number: String,
    pub received_at: String,
    pub received_by: String,
    pub carrier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picked_up_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picked_up_by: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceKind {
    Complaint,
    Maintenance,
    Security,
    General,
}

impl fmt::Display for OccurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Complaint => "Reclamacao",
            Self::Maintenance => "Manutencao",
            Self::Security => "Seguranca",
            Self::General => "Geral",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "Baixa",
            Self::Medium => "Media",
            Self::High => "Alta",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccurrenceStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl fmt::Display for OccurrenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "Aberto",
            Self::InProgress => "Em andamento",
            Self::Resolved => "Resolvido",
            Self::Closed => "Fechado",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: OccurrenceKind,
    pub priority: Priority,
    pub status: OccurrenceStatus,
    /// Actor or resident id.
    pub reported_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementKind {
    General,
    Maintenance,
    Emergency,
    Event,
}

impl fmt::Display for AnnouncementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::General => "Geral",
            Self::Maintenance => "Manutencao",
            Self::Emergency => "Emergencia",
            Self::Event => "Evento",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: AnnouncementKind,
    pub priority: Priority,
    pub author_id: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    pub created_at: String,
}

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn active_label(is_active: bool) -> &'static str {
    if is_active {
        "Ativo"
    } else {
        "Inativo"
    }
}

/// `2025-01-30T09:00:00Z` as `30/01/2025`. Anything that does not start with
/// an ISO date is returned unchanged.
pub fn date_pt_br(timestamp: &str) -> String {
    let date = timestamp.get(..10).unwrap_or(timestamp);
    let mut parts = date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) if y.len() == 4 && m.len() == 2 && d.len() == 2 => {
            format!("{}/{}/{}", d, m, y)
        }
        _ => timestamp.to_string(),
    }
}

/// The visitors a resident may see on their own screen: those pre-registered
/// for the unit of the resident record matching `actor`'s email. Empty when
/// the actor has no resident record.
pub fn resident_visitors(actor: &Actor, residents: &[Resident], visitors: &[Visitor]) -> Vec<Visitor> {
    let Some(resident) = residents.iter().find(|r| r.email == actor.email) else {
        tracing::debug!(actor = %actor.id, "no resident record for actor");
        return Vec::new();
    };
    visitors
        .iter()
        .filter(|v| v.unit_id == resident.unit_id && v.pre_registered)
        .cloned()
        .collect()
}

/// Deliveries with `status`, or all of them for `None`. Applied before the
/// delivery table's text search.
pub fn deliveries_with_status(deliveries: &[Delivery], status: Option<DeliveryStatus>) -> Vec<Delivery> {
    deliveries
        .iter()
        .filter(|d| match status {
            Some(wanted) => d.status == wanted,
            None => true,
        })
        .cloned()
        .collect()
}

/// Residents, searchable by name. `units` resolves the unit column.
pub fn resident_table(units: &[Unit]) -> TableSpec<Resident> {
    let unit_names: HashMap<String, String> = units.iter().map(|u| (u.id.clone(), u.display())).collect();
    TableSpec::new(vec![
        ColumnDef::new("name", "Nome", |r: &Resident| r.name.clone()),
        ColumnDef::new("phone", "Telefone", |r: &Resident| r.phone.clone()),
        ColumnDef::new("unit", "Unidade", move |r: &Resident| {
            unit_names.get(&r.unit_id).cloned().unwrap_or_else(|| "-".to_string())
        }),
        ColumnDef::new("isOwner", "Tipo", |r: &Resident| if r.is_owner { "Proprietario" } else { "Inquilino" }),
        ColumnDef::new("isActive", "Status", |r: &Resident| active_label(r.is_active)),
    ])
    .searchable_by("name", |r: &Resident| r.name.clone())
    .search_placeholder("Buscar por nome...")
}

/// Units, searchable by number.
pub fn unit_table() -> TableSpec<Unit> {
    TableSpec::new(vec![
        ColumnDef::new("number", "Unidade", |u: &Unit| u.display()),
        ColumnDef::new("floor", "Andar", |u: &Unit| u.floor),
        ColumnDef::new("type", "Tipo", |u: &Unit| match u.kind {
            UnitKind::Apartment => "Apartamento",
            UnitKind::Commercial => "Comercial",
            UnitKind::Parking => "Vaga",
        }),
        ColumnDef::new("status", "Status", |u: &Unit| match u.status {
            UnitStatus::Occupied => "Ocupada",
            UnitStatus::Vacant => "Vaga",
        }),
        ColumnDef::new("residents", "Moradores", |u: &Unit| u.residents.len()),
    ])
    .searchable_by("number", |u: &Unit| u.number.clone())
    .search_placeholder("Buscar por numero...")
}

/// Staff, searchable by name.
pub fn employee_table() -> TableSpec<Employee> {
    TableSpec::new(vec![
        ColumnDef::new("name", "Nome", |e: &Employee| e.name.clone()),
        ColumnDef::new("role", "Cargo", |e: &Employee| e.job),
        ColumnDef::new("shift", "Turno", |e: &Employee| e.shift.map_or_else(|| "-".to_string(), |s| s.to_string())),
        ColumnDef::new("phone", "Telefone", |e: &Employee| e.phone.clone()),
        ColumnDef::new("isActive", "Status", |e: &Employee| active_label(e.is_active)),
    ])
    .searchable_by("name", |e: &Employee| e.name.clone())
    .search_placeholder("Buscar funcionario...")
}

/// Visitors, searchable by name.
pub fn visitor_table() -> TableSpec<Visitor> {
    TableSpec::new(vec![
        ColumnDef::new("name", "Visitante", |v: &Visitor| v.name.clone()),
        ColumnDef::new("unitNumber", "Unidade", |v: &Visitor| v.unit_number.clone()),
        ColumnDef::new("purpose", "Motivo", |v: &Visitor| v.purpose.clone()),
        ColumnDef::new("vehiclePlate", "Veiculo", |v: &Visitor| or_dash(&v.vehicle_plate)),
        ColumnDef::new("status", "Status", |v: &Visitor| v.status),
    ])
    .searchable_by("name", |v: &Visitor| v.name.clone())
    .search_placeholder("Buscar visitante...")
}

/// A resident's pre-registered visitors, as returned by [`resident_visitors`].
pub fn resident_visitor_table() -> TableSpec<Visitor> {
    TableSpec::new(vec![
        ColumnDef::new("name", "Nome", |v: &Visitor| v.name.clone()),
        ColumnDef::new("purpose", "Motivo", |v: &Visitor| v.purpose.clone()),
        ColumnDef::new("createdAt", "Data Cadastro", |v: &Visitor| date_pt_br(&v.created_at)),
        ColumnDef::new("status", "Status", |v: &Visitor| v.status),
    ])
    .searchable_by("name", |v: &Visitor| v.name.clone())
    .search_placeholder("Buscar visitante...")
    .empty_message("Nenhum visitante pre-cadastrado")
}

/// Deliveries, searchable by tracking code, carrier or description.
pub fn delivery_table() -> TableSpec<Delivery> {
    TableSpec::new(vec![
        ColumnDef::new("unitNumber", "Unidade", |d: &Delivery| d.unit_number.clone()),
        ColumnDef::new("carrier", "Transportadora", |d: &Delivery| d.carrier.clone()),
        ColumnDef::new("trackingCode", "Codigo", |d: &Delivery| or_dash(&d.tracking_code)),
        ColumnDef::new("receivedAt", "Recebido em", |d: &Delivery| date_pt_br(&d.received_at)),
        ColumnDef::new("status", "Status", |d: &Delivery| d.status),
    ])
    // One line per field; queries come from a single-line input.
    .searchable_by("trackingCode", |d: &Delivery| {
        [d.tracking_code.as_deref(), Some(d.carrier.as_str()), d.description.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("\n")
    })
    .search_placeholder("Buscar por codigo, transportadora...")
    .empty_message("Nenhuma entrega encontrada.")
}

/// Occurrences, searchable by title.
pub fn occurrence_table(units: &[Unit]) -> TableSpec<Occurrence> {
    let unit_names: HashMap<String, String> = units.iter().map(|u| (u.id.clone(), u.display())).collect();
    TableSpec::new(vec![
        ColumnDef::new("title", "Ocorrencia", |o: &Occurrence| o.title.clone()),
        ColumnDef::new("type", "Tipo", |o: &Occurrence| o.kind),
        ColumnDef::new("unit", "Unidade", move |o: &Occurrence| {
            o.unit_id
                .as_ref()
                .and_then(|id| unit_names.get(id).cloned())
                .unwrap_or_else(|| "-".to_string())
        }),
        ColumnDef::new("priority", "Prioridade", |o: &Occurrence| o.priority),
        ColumnDef::new("status", "Status", |o: &Occurrence| o.status),
        ColumnDef::new("createdAt", "Data", |o: &Occurrence| date_pt_br(&o.created_at)),
    ])
    .searchable_by("title", |o: &Occurrence| o.title.clone())
    .search_placeholder("Buscar ocorrencia...")
    .empty_message("Nenhuma ocorrencia registrada")
}

/// Announcements, searchable by title.
pub fn announcement_table() -> TableSpec<Announcement> {
    TableSpec::new(vec![
        ColumnDef::new("title", "Titulo", |a: &Announcement| a.title.clone()),
        ColumnDef::new("type", "Tipo", |a: &Announcement| a.kind),
        ColumnDef::new("priority", "Prioridade", |a: &Announcement| a.priority),
        ColumnDef::new("isActive", "Status", |a: &Announcement| active_label(a.is_active)),
        ColumnDef::new("createdAt", "Data", |a: &Announcement| date_pt_br(&a.created_at)),
    ])
    .searchable_by("title", |a: &Announcement| a.title.clone())
    .search_placeholder("Buscar comunicado...")
    .empty_message("Nenhum comunicado encontrado")
}
