//! # Receipts and Daily Reports
//!
//! The two human-readable artifacts, one file per calendar date:
//!
//! - `sales_receipt_<date>.txt` - opened in append mode, one block per sale,
//!   written at commit time and never rewritten.
//! - `daily_report_<date>.txt` - manager summary, overwritten on each
//!   generation (re-running the report the same day replaces the file).
//!
//! The receipt layout is fixed; the store hands printed copies to customers
//! and staff eyeball these files, so the format stays stable.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use goldenhour_core::money::Money;
use goldenhour_core::types::SaleRecord;

use crate::error::StoreResult;

/// Accessor for per-date receipt and report files.
#[derive(Debug, Clone)]
pub struct ReceiptBook {
    dir: PathBuf,
}

impl ReceiptBook {
    pub(crate) fn new(dir: PathBuf) -> Self {
        ReceiptBook { dir }
    }

    fn receipt_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("sales_receipt_{date}.txt"))
    }

    fn report_path(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("daily_report_{date}.txt"))
    }

    /// Appends one receipt block to the day's receipt file, creating it on
    /// the first sale of the day. Returns the file path for the operator
    /// message.
    pub fn append_receipt(
        &self,
        record: &SaleRecord,
        currency_symbol: &str,
    ) -> StoreResult<PathBuf> {
        let path = self.receipt_path(record.date);

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        write!(
            file,
            "=== OFFICIAL RECEIPT ===\n\
             Date: {date} | Time: {time}\n\
             Customer: {customer}\n\
             Item: {model} x{qty}\n\
             Total: {sym}{total}\n\
             Payment: {payment}\n\
             Staff: {staff}\n\
             ---------------------------\n",
            date = record.date,
            time = record.time.format("%H:%M:%S"),
            customer = record.customer_name,
            model = record.model_name,
            qty = record.quantity,
            sym = currency_symbol,
            total = record.total(),
            payment = record.payment_method,
            staff = record.employee_name,
        )?;

        debug!(path = %path.display(), "Receipt appended");
        Ok(path)
    }

    /// Writes (or replaces) the day's summary report.
    ///
    /// `cutoff` is the store's closing time; a report generated after it
    /// carries an after-hours warning line so late totals are not mistaken
    /// for the closing figure.
    pub fn write_daily_report(
        &self,
        date: NaiveDate,
        total: Money,
        transactions: usize,
        currency_symbol: &str,
        generated_at: NaiveDateTime,
        cutoff: NaiveTime,
    ) -> StoreResult<PathBuf> {
        let path = self.report_path(date);

        let mut out = format!(
            "=== DAILY SALES REPORT ===\n\
             Date: {date}\n\
             Generated: {generated}\n\
             Transactions: {transactions}\n\
             Total Sales: {sym}{total}\n",
            generated = generated_at.format("%Y-%m-%d %H:%M:%S"),
            sym = currency_symbol,
        );
        if generated_at.date() == date && generated_at.time() > cutoff {
            out.push_str(&format!(
                "WARNING: generated after closing time ({})\n",
                cutoff.format("%H:%M")
            ));
        }
        out.push_str("==========================\n");

        fs::write(&path, out)?;
        debug!(path = %path.display(), "Daily report written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;
    use uuid::Uuid;

    fn record(customer: &str, time: &str) -> SaleRecord {
        SaleRecord {
            id: Uuid::new_v4().to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 31).unwrap(),
            time: time.parse().unwrap(),
            customer_name: customer.to_string(),
            model_name: "Widget".to_string(),
            quantity: 3,
            unit_price_cents: 1000,
            total_cents: 3000,
            payment_method: "Cash".to_string(),
            employee_name: "Jane".to_string(),
        }
    }

    #[test]
    fn test_receipts_append_same_day() {
        let dir = tempdir().unwrap();
        let book = ReceiptBook::new(dir.path().to_path_buf());

        let first = book.append_receipt(&record("Alice", "10:00:00"), "RM").unwrap();
        let second = book.append_receipt(&record("Bob", "11:30:00"), "RM").unwrap();
        assert_eq!(first, second);

        let text = fs::read_to_string(&first).unwrap();
        assert_eq!(text.matches("=== OFFICIAL RECEIPT ===").count(), 2);
        assert!(text.contains("Customer: Alice"));
        assert!(text.contains("Customer: Bob"));
        assert!(text.contains("Total: RM30.00"));
        assert!(text.contains("Item: Widget x3"));
    }

    #[test]
    fn test_receipt_file_named_by_date() {
        let dir = tempdir().unwrap();
        let book = ReceiptBook::new(dir.path().to_path_buf());

        let path = book.append_receipt(&record("Alice", "10:00:00"), "RM").unwrap();
        assert!(path.ends_with("sales_receipt_2026-08-31.txt"));
    }

    #[test]
    fn test_daily_report_overwrites() {
        let dir = tempdir().unwrap();
        let book = ReceiptBook::new(dir.path().to_path_buf());
        let date = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        let cutoff: NaiveTime = "22:00:00".parse().unwrap();

        let noon = date.and_time("12:00:00".parse().unwrap());
        let path = book
            .write_daily_report(date, Money::from_cents(3000), 1, "RM", noon, cutoff)
            .unwrap();
        let first = fs::read_to_string(&path).unwrap();
        assert!(first.contains("Total Sales: RM30.00"));
        assert!(!first.contains("WARNING"));

        // Second run replaces the file, no duplicate blocks.
        book.write_daily_report(date, Money::from_cents(9000), 3, "RM", noon, cutoff)
            .unwrap();
        let second = fs::read_to_string(&path).unwrap();
        assert!(second.contains("Total Sales: RM90.00"));
        assert!(!second.contains("RM30.00"));
        assert_eq!(second.matches("=== DAILY SALES REPORT ===").count(), 1);
    }

    #[test]
    fn test_daily_report_after_hours_warning() {
        let dir = tempdir().unwrap();
        let book = ReceiptBook::new(dir.path().to_path_buf());
        let date = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        let cutoff: NaiveTime = "22:00:00".parse().unwrap();

        let late = date.and_time("23:15:00".parse().unwrap());
        let path = book
            .write_daily_report(date, Money::zero(), 0, "RM", late, cutoff)
            .unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("WARNING: generated after closing time (22:00)"));
    }
}
