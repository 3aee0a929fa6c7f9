//! # Sales Ledger
//!
//! Append-only history of completed sale transactions for the lifetime of
//! the process.
//!
//! ## Lifecycle Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     SalesLedger Lifecycle                               │
//! │                                                                         │
//! │  checkout commit ──► append(record)      (insertion order = commit     │
//! │                            │              order, never re-sorted)      │
//! │                            ▼                                            │
//! │  receipt artifact  ◄── store layer       (append-mode side effect;     │
//! │                                           failure reported, never      │
//! │                                           rolled back - the sale has   │
//! │                                           already happened)            │
//! │                                                                         │
//! │  The history is NEVER reloaded from disk within a session. The         │
//! │  receipt files are human artifacts, not a machine-readable log.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::SaleRecord;

// =============================================================================
// Sort Keys
// =============================================================================

/// Sortable projections of a sale record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleSortKey {
    /// Calendar date, then time of day.
    Date,
    /// Sale total in cents.
    Total,
    /// Customer name (case-insensitive).
    Customer,
}

// =============================================================================
// Per-Employee Aggregate
// =============================================================================

/// Sales totals grouped by the operator who committed them.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeSales {
    pub employee_name: String,
    /// Number of committed transactions.
    pub transactions: usize,
    /// Sum of sale totals, in cents.
    pub total_cents: i64,
}

impl EmployeeSales {
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Sales Ledger
// =============================================================================

/// Ordered in-memory history of committed sales.
#[derive(Debug, Clone, Default)]
pub struct SalesLedger {
    records: Vec<SaleRecord>,
}

impl SalesLedger {
    pub fn new() -> Self {
        SalesLedger::default()
    }

    /// Appends a committed record. Never fails: by the time a record
    /// reaches the ledger the sale has already happened against physical
    /// stock.
    pub fn append(&mut self, record: SaleRecord) {
        self.records.push(record);
    }

    /// All records in commit order.
    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // -------------------------------------------------------------------------
    // Projections (read-only)
    // -------------------------------------------------------------------------

    /// Union substring search: a record matches when ANY of its date text,
    /// customer name, or model name contains the query (case-insensitive).
    ///
    /// Pure function of the current history and the query.
    pub fn search(&self, query: &str) -> Vec<&SaleRecord> {
        let query = query.trim().to_ascii_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.date.to_string().contains(&query)
                    || r.customer_name.to_ascii_lowercase().contains(&query)
                    || r.model_name.to_ascii_lowercase().contains(&query)
            })
            .collect()
    }

    /// Sum of totals over records whose date equals `date` exactly.
    ///
    /// Exact equality, not substring: "2026-08" matches nothing here even
    /// though it would match in [`SalesLedger::search`].
    pub fn daily_total(&self, date: NaiveDate) -> Money {
        self.records
            .iter()
            .filter(|r| r.date == date)
            .map(SaleRecord::total)
            .sum()
    }

    /// Filters by an optional search query, then stable-sorts.
    ///
    /// Equal keys preserve insertion (commit) order - `sort_by` on a Vec is
    /// stable, which is exactly the contract.
    pub fn filter_and_sort(
        &self,
        query: Option<&str>,
        key: SaleSortKey,
        ascending: bool,
    ) -> Vec<&SaleRecord> {
        let mut selected = match query {
            Some(q) => self.search(q),
            None => self.records.iter().collect(),
        };

        selected.sort_by(|a, b| {
            let ordering = match key {
                SaleSortKey::Date => a.date.cmp(&b.date).then(a.time.cmp(&b.time)),
                SaleSortKey::Total => a.total_cents.cmp(&b.total_cents),
                SaleSortKey::Customer => a
                    .customer_name
                    .to_ascii_lowercase()
                    .cmp(&b.customer_name.to_ascii_lowercase()),
            };
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });

        selected
    }

    /// Groups totals and transaction counts by employee name, in order of
    /// each employee's first committed sale (deterministic for display).
    pub fn employee_summary(&self) -> Vec<EmployeeSales> {
        let mut summary: Vec<EmployeeSales> = Vec::new();

        for record in &self.records {
            match summary
                .iter_mut()
                .find(|s| s.employee_name == record.employee_name)
            {
                Some(entry) => {
                    entry.transactions += 1;
                    entry.total_cents += record.total_cents;
                }
                None => summary.push(EmployeeSales {
                    employee_name: record.employee_name.clone(),
                    transactions: 1,
                    total_cents: record.total_cents,
                }),
            }
        }

        summary
    }

    // -------------------------------------------------------------------------
    // Administrative override
    // -------------------------------------------------------------------------

    /// Directly replaces a record by its position in commit order.
    ///
    /// This bypasses the one-record-per-decrement invariant on purpose: it
    /// is the manager-only correction path, presented at the menu layer as
    /// distinct from a normal sale.
    pub fn overwrite(&mut self, index: usize, record: SaleRecord) -> CoreResult<()> {
        match self.records.get_mut(index) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(CoreError::SaleNotFound(index)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn record(
        date: &str,
        time: &str,
        customer: &str,
        model: &str,
        total_cents: i64,
        employee: &str,
    ) -> SaleRecord {
        SaleRecord {
            id: format!("{date}-{time}-{customer}"),
            date: date.parse().unwrap(),
            time: time.parse::<NaiveTime>().unwrap(),
            customer_name: customer.to_string(),
            model_name: model.to_string(),
            quantity: 1,
            unit_price_cents: total_cents,
            total_cents,
            payment_method: "Cash".to_string(),
            employee_name: employee.to_string(),
        }
    }

    fn test_ledger() -> SalesLedger {
        let mut ledger = SalesLedger::new();
        ledger.append(record("2026-08-30", "09:00:00", "Alice", "Widget", 1000, "Jane"));
        ledger.append(record("2026-08-31", "10:00:00", "Bob", "Gadget", 2550, "Jane"));
        ledger.append(record("2026-08-31", "11:00:00", "alicia", "Widget", 500, "Ken"));
        ledger
    }

    #[test]
    fn test_search_union_over_three_fields() {
        let ledger = test_ledger();

        // Customer substring (case-insensitive): Alice + alicia.
        assert_eq!(ledger.search("ALIC").len(), 2);
        // Model substring.
        assert_eq!(ledger.search("gadg").len(), 1);
        // Date substring matches both 2026-08-31 records.
        assert_eq!(ledger.search("08-31").len(), 2);
        // Union: "a" appears in every customer or model here.
        assert_eq!(ledger.search("a").len(), 3);
        assert!(ledger.search("nothing").is_empty());
    }

    #[test]
    fn test_daily_total_exact_date_only() {
        let ledger = test_ledger();

        let total = ledger.daily_total("2026-08-31".parse().unwrap());
        assert_eq!(total.cents(), 2550 + 500);

        // Substring-like partial dates don't aggregate; exact match only.
        assert_eq!(ledger.daily_total("2026-08-01".parse().unwrap()).cents(), 0);
    }

    #[test]
    fn test_filter_and_sort_by_total() {
        let ledger = test_ledger();

        let sorted = ledger.filter_and_sort(None, SaleSortKey::Total, true);
        let totals: Vec<i64> = sorted.iter().map(|r| r.total_cents).collect();
        assert_eq!(totals, vec![500, 1000, 2550]);

        let sorted = ledger.filter_and_sort(None, SaleSortKey::Total, false);
        let totals: Vec<i64> = sorted.iter().map(|r| r.total_cents).collect();
        assert_eq!(totals, vec![2550, 1000, 500]);
    }

    #[test]
    fn test_filter_and_sort_is_stable_on_equal_keys() {
        let mut ledger = SalesLedger::new();
        ledger.append(record("2026-08-31", "09:00:00", "Cara", "First", 1000, "Jane"));
        ledger.append(record("2026-08-31", "09:00:00", "cara", "Second", 1000, "Jane"));

        // Every key compares equal; insertion order must survive.
        for key in [SaleSortKey::Date, SaleSortKey::Total, SaleSortKey::Customer] {
            let sorted = ledger.filter_and_sort(None, key, true);
            assert_eq!(sorted[0].model_name, "First");
            assert_eq!(sorted[1].model_name, "Second");
        }
    }

    #[test]
    fn test_filter_and_sort_applies_query_first() {
        let ledger = test_ledger();

        let widgets = ledger.filter_and_sort(Some("widget"), SaleSortKey::Date, false);
        assert_eq!(widgets.len(), 2);
        assert_eq!(widgets[0].date.to_string(), "2026-08-31");
    }

    #[test]
    fn test_employee_summary_groups_in_first_seen_order() {
        let ledger = test_ledger();

        let summary = ledger.employee_summary();
        assert_eq!(summary.len(), 2);

        assert_eq!(summary[0].employee_name, "Jane");
        assert_eq!(summary[0].transactions, 2);
        assert_eq!(summary[0].total_cents, 3550);

        assert_eq!(summary[1].employee_name, "Ken");
        assert_eq!(summary[1].transactions, 1);
        assert_eq!(summary[1].total_cents, 500);
    }

    #[test]
    fn test_overwrite_bounds_checked() {
        let mut ledger = test_ledger();
        let replacement = record("2026-08-31", "12:00:00", "Dana", "Widget", 999, "Jane");

        ledger.overwrite(1, replacement.clone()).unwrap();
        assert_eq!(ledger.records()[1].customer_name, "Dana");

        assert!(matches!(
            ledger.overwrite(99, replacement),
            Err(CoreError::SaleNotFound(99))
        ));
    }
}
