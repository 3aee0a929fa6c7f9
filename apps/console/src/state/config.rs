//! # Configuration State
//!
//! Store-wide presentation and policy settings, fixed at startup from the
//! command line. There is no config file; the handful of knobs the console
//! has fit in CLI flags.

use chrono::NaiveTime;

/// Store-wide configuration.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Shown in the menu banner.
    pub store_name: String,

    /// Prefix for money amounts on receipts and reports ("RM30.00").
    pub currency_symbol: String,

    /// Closing time; a daily report generated later carries a warning line.
    pub report_cutoff: NaiveTime,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "GOLDENHOUR STORE".to_string(),
            currency_symbol: "RM".to_string(),
            // 22:00 closing, as printed on the door.
            report_cutoff: NaiveTime::from_hms_opt(22, 0, 0)
                .unwrap_or(NaiveTime::MIN),
        }
    }
}
