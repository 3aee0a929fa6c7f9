//! # Domain Types
//!
//! Core domain types used throughout the store console.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   OutletCode    │   │    Employee     │   │   SaleRecord    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  3 chars, upper │   │  id (prefix =   │   │  id (UUID)      │       │
//! │  │  "C60", "KLG"   │   │   outlet code)  │   │  date, time     │       │
//! │  └─────────────────┘   │  role           │   │  customer/model │       │
//! │                        │  outlet         │   │  qty, total     │       │
//! │  ┌─────────────────┐   └─────────────────┘   │  payment, staff │       │
//! │  │      Role       │                         └─────────────────┘       │
//! │  │  ─────────────  │   ┌─────────────────┐                             │
//! │  │  Manager        │   │ OutletDirectory │                             │
//! │  │  FullTime       │   │  code → name    │                             │
//! │  │  PartTime       │   │  (read-only)    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! A `SaleRecord` carries:
//! - `id`: UUID v4 - immutable, ties the in-memory record to its receipt
//! - Business fields (date, customer, model) - human-readable, searchable

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Outlet Code
// =============================================================================

/// A short code identifying one physical store location.
///
/// ## Format
/// Exactly three alphanumeric characters, stored uppercased ("C60", "KLG").
/// Employee ids embed the code as their first three characters, so the
/// parser is the single place the format is defined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutletCode(String);

impl OutletCode {
    /// Parses an outlet code, uppercasing it.
    ///
    /// ## Example
    /// ```rust
    /// use goldenhour_core::types::OutletCode;
    ///
    /// assert_eq!(OutletCode::parse("c60").unwrap().as_str(), "C60");
    /// assert!(OutletCode::parse("TOOLONG").is_err());
    /// assert!(OutletCode::parse("C-6").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.len() != 3 || !text.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidFormat {
                field: "outlet code".to_string(),
                reason: "must be exactly 3 letters or digits".to_string(),
            });
        }
        Ok(OutletCode(text.to_ascii_uppercase()))
    }

    /// Extracts the outlet code embedded in an employee id ("C6013" → "C60").
    pub fn from_employee_id(id: &str) -> Result<Self, ValidationError> {
        let id = id.trim();
        if id.len() < 3 {
            return Err(ValidationError::InvalidFormat {
                field: "employee id".to_string(),
                reason: "must start with a 3-character outlet code".to_string(),
            });
        }
        Self::parse(&id[..3])
    }

    /// Returns the code as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OutletCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Outlet Directory
// =============================================================================

/// Lookup table from outlet code to display name.
///
/// Loaded once at startup from the outlet table; immutable for the process
/// lifetime. There is no write path (outlet registration is out of scope).
#[derive(Debug, Clone, Default)]
pub struct OutletDirectory {
    // File order preserved; the table holds a handful of rows at most.
    entries: Vec<(OutletCode, String)>,
}

impl OutletDirectory {
    /// Builds a directory from (code, display name) pairs in file order.
    pub fn new(entries: Vec<(OutletCode, String)>) -> Self {
        OutletDirectory { entries }
    }

    /// Resolves a code to its human-readable outlet name.
    pub fn resolve(&self, code: &OutletCode) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, name)| name.as_str())
    }

    /// Checks whether a code is registered.
    pub fn contains(&self, code: &OutletCode) -> bool {
        self.resolve(code).is_some()
    }

    /// Renders "C60 (Kuala Lumpur)" style labels for menus and receipts.
    pub fn label(&self, code: &OutletCode) -> String {
        match self.resolve(code) {
            Some(name) => format!("{} ({})", code, name),
            None => code.to_string(),
        }
    }

    /// Iterates entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&OutletCode, &str)> {
        self.entries.iter().map(|(c, n)| (c, n.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Role
// =============================================================================

/// Employee role, parsed from the employee table's role column.
///
/// ## Why an Enum?
/// Role gating by string comparison ("Manager" == role) is fragile and
/// silently grants nothing on a typo. The closed enum plus an explicit
/// capability set makes every gate auditable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    FullTime,
    PartTime,
}

/// Actions that are gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Register a new employee.
    RegisterEmployee,
    /// Directly overwrite stock or sales entries (administrative override).
    EditRecords,
    /// Generate the end-of-day report artifact.
    DailyReport,
}

impl Role {
    /// Parses the role column, accepting the legacy table spellings.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        match text.trim().to_ascii_lowercase().as_str() {
            "manager" => Ok(Role::Manager),
            "full-time" | "fulltime" | "full time" => Ok(Role::FullTime),
            "part-time" | "parttime" | "part time" => Ok(Role::PartTime),
            other => Err(ValidationError::InvalidFormat {
                field: "role".to_string(),
                reason: format!("unknown role '{other}'"),
            }),
        }
    }

    /// Returns the spelling used in the employee table.
    pub fn as_table_str(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::FullTime => "Full-time",
            Role::PartTime => "Part-time",
        }
    }

    /// Checks whether the role grants a capability.
    ///
    /// Only managers hold the administrative capabilities today; the match
    /// is exhaustive so a new role forces a decision here.
    pub fn can(&self, capability: Capability) -> bool {
        match (self, capability) {
            (Role::Manager, _) => true,
            (Role::FullTime | Role::PartTime, _) => false,
        }
    }
}

// =============================================================================
// Employee
// =============================================================================

/// A registered employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Business id; the first three characters are the outlet code.
    pub id: String,

    /// Display name (shown in menus and on receipts).
    pub name: String,

    /// Role used for capability gating.
    pub role: Role,

    /// Password as stored in the employee table.
    ///
    /// Plain text, for compatibility with the existing table format.
    /// TODO: hash with argon2 once the employee table format is versioned.
    pub password: String,

    /// Home outlet, derived from the id prefix at load time.
    pub outlet: OutletCode,
}

impl Employee {
    /// Constant-shape password check (the table stores plain text).
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// One completed sale, immutable once created.
///
/// ## Invariant
/// Every `SaleRecord` corresponds to exactly one committed decrement of the
/// stock ledger for the outlet active at commit time. Records are never
/// mutated or deleted by normal operation; the manager-only edit path is an
/// explicit administrative override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Immutable identifier (UUID v4).
    pub id: String,

    /// Calendar date of the transaction, captured at commit time.
    pub date: NaiveDate,

    /// Time of day of the transaction, captured at commit time.
    pub time: NaiveTime,

    /// Free-text customer identifier.
    pub customer_name: String,

    /// Model name as resolved from the stock ledger at commit time.
    /// Stored as a plain string; no foreign key after the fact.
    pub model_name: String,

    /// Units sold (always positive).
    pub quantity: i64,

    /// Unit price at the moment of sale, in cents.
    pub unit_price_cents: i64,

    /// quantity × unit price, computed at commit time, in cents.
    pub total_cents: i64,

    /// Free-text payment method ("Cash", "QR", ...).
    pub payment_method: String,

    /// Operator who committed the sale.
    pub employee_name: String,
}

impl SaleRecord {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the sale total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Stock Count Status
// =============================================================================

/// Outcome of reconciling a physical count against the recorded quantity.
///
/// A mismatch is a *report*, never a correction: a human investigates before
/// any adjustment is applied through the normal stock movement path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountStatus {
    /// Physical count equals the recorded quantity.
    Match,
    /// Discrepancy between the records and the shelf.
    Mismatch { recorded: i64, counted: i64 },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlet_code_parse() {
        assert_eq!(OutletCode::parse("c60").unwrap().as_str(), "C60");
        assert_eq!(OutletCode::parse(" KLG ").unwrap().as_str(), "KLG");

        assert!(OutletCode::parse("").is_err());
        assert!(OutletCode::parse("AB").is_err());
        assert!(OutletCode::parse("ABCD").is_err());
        assert!(OutletCode::parse("A-1").is_err());
    }

    #[test]
    fn test_outlet_code_from_employee_id() {
        assert_eq!(OutletCode::from_employee_id("C6013").unwrap().as_str(), "C60");
        assert!(OutletCode::from_employee_id("C6").is_err());
    }

    #[test]
    fn test_directory_resolve_and_label() {
        let code = OutletCode::parse("C60").unwrap();
        let dir = OutletDirectory::new(vec![(code.clone(), "Central".to_string())]);

        assert_eq!(dir.resolve(&code), Some("Central"));
        assert_eq!(dir.label(&code), "C60 (Central)");

        let missing = OutletCode::parse("ZZZ").unwrap();
        assert_eq!(dir.resolve(&missing), None);
        assert!(!dir.contains(&missing));
    }

    #[test]
    fn test_role_parse_accepts_table_spellings() {
        assert_eq!(Role::parse("Manager").unwrap(), Role::Manager);
        assert_eq!(Role::parse("full-time").unwrap(), Role::FullTime);
        assert_eq!(Role::parse("Part-Time").unwrap(), Role::PartTime);
        assert!(Role::parse("intern").is_err());
    }

    #[test]
    fn test_role_capabilities() {
        assert!(Role::Manager.can(Capability::RegisterEmployee));
        assert!(Role::Manager.can(Capability::EditRecords));
        assert!(Role::Manager.can(Capability::DailyReport));

        assert!(!Role::FullTime.can(Capability::RegisterEmployee));
        assert!(!Role::PartTime.can(Capability::EditRecords));
    }

    #[test]
    fn test_role_table_round_trip() {
        for role in [Role::Manager, Role::FullTime, Role::PartTime] {
            assert_eq!(Role::parse(role.as_table_str()).unwrap(), role);
        }
    }

    #[test]
    fn test_role_serializes_snake_case() {
        // Diagnostic dumps rely on this shape.
        assert_eq!(serde_json::to_string(&Role::FullTime).unwrap(), "\"full_time\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"part_time\"").unwrap(),
            Role::PartTime
        );
    }

    #[test]
    fn test_sale_record_money_accessors() {
        let record = SaleRecord {
            id: "r1".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            customer_name: "Alice".to_string(),
            model_name: "Widget".to_string(),
            quantity: 3,
            unit_price_cents: 1000,
            total_cents: 3000,
            payment_method: "Cash".to_string(),
            employee_name: "Jane".to_string(),
        };

        assert_eq!(record.unit_price(), Money::from_cents(1000));
        assert_eq!(record.total(), Money::from_cents(3000));
    }
}
