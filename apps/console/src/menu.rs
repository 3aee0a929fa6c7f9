//! # Menu Layer
//!
//! The interactive terminal surface. This module owns ALL prompting and
//! printing; every action is one call into [`crate::commands`].
//!
//! ## Menu Tree
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Menu Tree                                       │
//! │                                                                         │
//! │  Login ──► Main                                                         │
//! │            ├── 1 Clock in            ├── 6 Register employee (manager) │
//! │            ├── 2 Clock out           ├── 7 Edit records      (manager) │
//! │            ├── 3 Stock menu          ├── 8 Daily report      (manager) │
//! │            │     view / search /     └── 9 Log out                     │
//! │            │     in / out /                                             │
//! │            │     morning & night count                                  │
//! │            ├── 4 New sale                                               │
//! │            └── 5 Sales & search                                         │
//! │                  list sorted / search / per-employee summary            │
//! │                                                                         │
//! │  Business errors print one line and re-show the menu. Only I/O errors  │
//! │  on stdin/stdout propagate out.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The clock is read HERE, once per recorded action, and passed down. Core
//! never sees `Local::now()`.

use std::io::{self, Write as _};

use chrono::{Local, NaiveDate, NaiveDateTime};

use goldenhour_core::sales::SaleSortKey;
use goldenhour_core::types::{Capability, CountStatus};
use goldenhour_core::Money;

use crate::commands::{attendance, edit, employee, report, sale, stock};
use crate::state::{AppState, Session};

// =============================================================================
// Prompt Helpers
// =============================================================================

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

/// Prompts for an integer; prints the problem and returns None on a
/// non-numeric entry so the caller can abort the current action.
fn prompt_i64(label: &str) -> io::Result<Option<i64>> {
    let text = prompt(label)?;
    match text.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("'{text}' is not a number");
            Ok(None)
        }
    }
}

/// Prompts for a date; blank means today.
fn prompt_date(label: &str, today: NaiveDate) -> io::Result<Option<NaiveDate>> {
    let text = prompt(label)?;
    if text.is_empty() {
        return Ok(Some(today));
    }
    match text.parse() {
        Ok(date) => Ok(Some(date)),
        Err(_) => {
            println!("'{text}' is not a date (expected YYYY-MM-DD)");
            Ok(None)
        }
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        println!("{warning}");
    }
}

// =============================================================================
// Login Loop
// =============================================================================

/// Top-level loop: login menu until the operator exits the program.
pub fn login_loop(state: &mut AppState) -> io::Result<()> {
    loop {
        println!();
        println!("===== {} =====", state.config.store_name);
        println!("1. Log in");
        println!("2. Exit");

        match prompt("Choice")?.as_str() {
            "1" => {
                let id = prompt("Employee id")?;
                let password = prompt("Password")?;
                match Session::open(state, &id, &password) {
                    Ok(mut session) => main_menu(state, &mut session)?,
                    Err(err) => println!("{err}"),
                }
            }
            "2" => return Ok(()),
            other => println!("Unknown choice '{other}'"),
        }
    }
}

// =============================================================================
// Main Menu
// =============================================================================

fn main_menu(state: &mut AppState, session: &mut Session) -> io::Result<()> {
    let is_manager = session.employee().role.can(Capability::EditRecords);

    loop {
        let employee = session.employee();
        println!();
        println!(
            "--- {} | {} | {} ---",
            employee.name,
            employee.role.as_table_str(),
            state.outlets.label(&employee.outlet)
        );
        println!("1. Clock in");
        println!("2. Clock out");
        println!("3. Stock");
        println!("4. New sale");
        println!("5. Sales & search");
        if is_manager {
            println!("6. Register employee");
            println!("7. Edit records");
            println!("8. Daily report");
        }
        println!("9. Log out");

        match prompt("Choice")?.as_str() {
            "1" => match attendance::clock_in(state, session, now()) {
                Ok(warning) => {
                    println!("Clocked in. Have a good shift!");
                    print_warnings(warning.as_slice());
                }
                Err(err) => println!("{err}"),
            },
            "2" => match attendance::clock_out(state, session, now()) {
                Ok((worked, warning)) => {
                    println!(
                        "Clocked out. Worked {}h {:02}m.",
                        worked.num_hours(),
                        worked.num_minutes() % 60
                    );
                    print_warnings(warning.as_slice());
                }
                Err(err) => println!("{err}"),
            },
            "3" => stock_menu(state, session)?,
            "4" => sale_flow(state, session)?,
            "5" => sales_menu(state)?,
            "6" if is_manager => register_flow(state, session)?,
            "7" if is_manager => edit_menu(state, session)?,
            "8" if is_manager => report_flow(state, session)?,
            "9" => return Ok(()),
            other => println!("Unknown choice '{other}'"),
        }
    }
}

// =============================================================================
// Stock
// =============================================================================

fn stock_menu(state: &AppState, session: &mut Session) -> io::Result<()> {
    loop {
        println!();
        println!("--- Stock ({}) ---", session_outlet_label(state, session));
        println!("1. View stock");
        println!("2. Search models");
        println!("3. Stock in");
        println!("4. Stock out");
        println!("5. Morning count");
        println!("6. Night count");
        println!("7. Back");

        match prompt("Choice")?.as_str() {
            "1" => view_stock(state, session),
            "2" => {
                let query = prompt("Search")?;
                match stock::search_stock(session, &query) {
                    Ok(rows) if rows.is_empty() => println!("No models match '{query}'"),
                    Ok(rows) => {
                        for row in rows {
                            print_stock_row(state, session, row);
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
            "3" => movement_flow(state, session, true)?,
            "4" => movement_flow(state, session, false)?,
            "5" | "6" => count_flow(session)?,
            "7" => return Ok(()),
            other => println!("Unknown choice '{other}'"),
        }
    }
}

fn session_outlet_label(state: &AppState, session: &Session) -> String {
    state.outlets.label(&session.employee().outlet)
}

fn print_stock_row(
    state: &AppState,
    session: &Session,
    row: &goldenhour_core::stock::StockModel,
) {
    println!(
        "  {:<30} {}{:>10}  qty {}",
        row.model_name,
        state.config.currency_symbol,
        row.price().to_string(),
        session.stock.active_quantity(row)
    );
}

fn view_stock(state: &AppState, session: &Session) {
    if session.stock.is_empty() {
        println!("No stock records for this outlet.");
        return;
    }
    for row in session.stock.rows() {
        print_stock_row(state, session, row);
    }
}

fn movement_flow(state: &AppState, session: &mut Session, inbound: bool) -> io::Result<()> {
    let model = prompt("Model")?;
    let Some(quantity) = prompt_i64("Quantity")? else {
        return Ok(());
    };

    let result = if inbound {
        stock::stock_in(state, session, &model, quantity)
    } else {
        stock::stock_out(state, session, &model, quantity)
    };

    match result {
        Ok(movement) => {
            println!(
                "{}: now {} on hand",
                movement.model_name, movement.new_quantity
            );
            print_warnings(movement.warning.as_slice());
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn count_flow(session: &Session) -> io::Result<()> {
    let model = prompt("Model")?;
    let Some(counted) = prompt_i64("Counted quantity")? else {
        return Ok(());
    };

    match stock::count_stock(session, &model, counted) {
        Ok(CountStatus::Match) => println!("Count matches the records."),
        Ok(CountStatus::Mismatch { recorded, counted }) => println!(
            "MISMATCH: records say {recorded}, shelf says {counted}. Investigate before adjusting."
        ),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

// =============================================================================
// Sales
// =============================================================================

fn sale_flow(state: &mut AppState, session: &mut Session) -> io::Result<()> {
    let customer = prompt("Customer name")?;
    let model = prompt("Model")?;

    let resolved = match sale::begin_sale(session, &customer, &model) {
        Ok(resolved) => resolved,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    println!(
        "{} @ {}{} ({} available)",
        resolved.model_name(),
        state.config.currency_symbol,
        resolved.unit_price(),
        resolved.available()
    );

    let Some(quantity) = prompt_i64("Quantity")? else {
        return Ok(());
    };
    let validated = match resolved.with_quantity(quantity) {
        Ok(validated) => validated,
        Err(err) => {
            println!("{err}");
            return Ok(());
        }
    };

    println!(
        "Total: {}{}",
        state.config.currency_symbol,
        validated.total()
    );
    let payment = prompt("Payment method")?;

    match sale::commit_sale(state, session, validated, &payment, now()) {
        Ok(outcome) => {
            println!(
                "Sale recorded: {} x{} = {}{}",
                outcome.record.model_name,
                outcome.record.quantity,
                state.config.currency_symbol,
                outcome.record.total()
            );
            if let Some(path) = &outcome.receipt_path {
                println!("Receipt: {}", path.display());
            }
            print_warnings(&outcome.warnings);
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn sales_menu(state: &AppState) -> io::Result<()> {
    loop {
        println!();
        println!("--- Sales & search ---");
        println!("1. List sales (sorted)");
        println!("2. Search sales");
        println!("3. Per-employee summary");
        println!("4. Back");

        match prompt("Choice")?.as_str() {
            "1" => list_sales_flow(state)?,
            "2" => {
                let query = prompt("Search (date, customer, or model)")?;
                match report::search_sales(state, &query) {
                    Ok(matches) if matches.is_empty() => println!("No sales match '{query}'"),
                    Ok(matches) => {
                        for record in matches {
                            print_sale_record(state, record);
                        }
                    }
                    Err(err) => println!("{err}"),
                }
            }
            "3" => {
                let summary = report::employee_summary(state);
                if summary.is_empty() {
                    println!("No sales recorded yet.");
                }
                for entry in summary {
                    println!(
                        "  {:<20} {:>3} sales  {}{}",
                        entry.employee_name,
                        entry.transactions,
                        state.config.currency_symbol,
                        entry.total()
                    );
                }
            }
            "4" => return Ok(()),
            other => println!("Unknown choice '{other}'"),
        }
    }
}

fn list_sales_flow(state: &AppState) -> io::Result<()> {
    let key = match prompt("Sort by (date/total/customer)")?.to_ascii_lowercase().as_str() {
        "" | "date" => SaleSortKey::Date,
        "total" => SaleSortKey::Total,
        "customer" => SaleSortKey::Customer,
        other => {
            println!("Unknown sort key '{other}'");
            return Ok(());
        }
    };
    let ascending = !matches!(
        prompt("Order (asc/desc)")?.to_ascii_lowercase().as_str(),
        "desc"
    );

    let records = state.sales.filter_and_sort(None, key, ascending);
    if records.is_empty() {
        println!("No sales recorded yet.");
    }
    for record in records {
        print_sale_record(state, record);
    }
    Ok(())
}

fn print_sale_record(state: &AppState, record: &goldenhour_core::types::SaleRecord) {
    println!(
        "  {} {} | {:<20} | {} x{} | {}{} | {} | {}",
        record.date,
        record.time.format("%H:%M:%S"),
        record.customer_name,
        record.model_name,
        record.quantity,
        state.config.currency_symbol,
        record.total(),
        record.payment_method,
        record.employee_name
    );
}

// =============================================================================
// Manager Flows
// =============================================================================

fn register_flow(state: &mut AppState, session: &Session) -> io::Result<()> {
    let id = prompt("New employee id (outlet code + digits)")?;
    let name = prompt("Name")?;
    let role = prompt("Role (Manager/Full-time/Part-time)")?;
    let password = prompt("Password")?;

    match employee::register_employee(state, session, &id, &name, &role, &password) {
        Ok(registered) => println!(
            "Registered {} ({}) at {}",
            registered.id,
            registered.role.as_table_str(),
            state.outlets.label(&registered.outlet)
        ),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn report_flow(state: &AppState, session: &Session) -> io::Result<()> {
    let today = now().date();
    let Some(date) = prompt_date("Report date (blank = today)", today)? else {
        return Ok(());
    };

    match report::write_daily_report(state, session, date, now()) {
        Ok(path) => println!("Report written to {}", path.display()),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn edit_menu(state: &mut AppState, session: &mut Session) -> io::Result<()> {
    loop {
        println!();
        println!("--- Edit records (administrative) ---");
        println!("1. Edit stock row");
        println!("2. Edit sale record");
        println!("3. Back");

        match prompt("Choice")?.as_str() {
            "1" => edit_stock_flow(state, session)?,
            "2" => edit_sale_flow(state, session)?,
            "3" => return Ok(()),
            other => println!("Unknown choice '{other}'"),
        }
    }
}

fn edit_stock_flow(state: &AppState, session: &mut Session) -> io::Result<()> {
    let model = prompt("Model to edit")?;

    let new_name = match prompt("New name (blank keeps)")?.as_str() {
        "" => None,
        name => Some(name.to_string()),
    };
    let new_price = match prompt("New price (blank keeps)")?.as_str() {
        "" => None,
        text => match Money::parse(text) {
            Ok(price) => Some(price),
            Err(err) => {
                println!("{err}");
                return Ok(());
            }
        },
    };
    let new_quantity = match prompt("New quantity (blank keeps)")?.as_str() {
        "" => None,
        text => match text.parse() {
            Ok(qty) => Some(qty),
            Err(_) => {
                println!("'{text}' is not a number");
                return Ok(());
            }
        },
    };

    match edit::edit_stock_row(
        state,
        session,
        &model,
        new_name.as_deref(),
        new_price,
        new_quantity,
    ) {
        Ok(warning) => {
            println!("Stock row updated.");
            print_warnings(warning.as_slice());
        }
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn edit_sale_flow(state: &mut AppState, session: &Session) -> io::Result<()> {
    if state.sales.is_empty() {
        println!("No sales recorded yet.");
        return Ok(());
    }

    for (index, record) in state.sales.records().iter().enumerate() {
        println!(
            "  [{index}] {} | {} | {} x{}",
            record.date, record.customer_name, record.model_name, record.quantity
        );
    }
    let Some(index) = prompt_i64("Record number")? else {
        return Ok(());
    };
    let Ok(index) = usize::try_from(index) else {
        println!("'{index}' is not a record number");
        return Ok(());
    };
    let Some(mut corrected) = state.sales.records().get(index).cloned() else {
        println!("No sale record at position {index}");
        return Ok(());
    };

    // Blank keeps the current value. Quantity edits recompute the total
    // from the recorded unit price.
    let customer = prompt("New customer name (blank keeps)")?;
    if !customer.is_empty() {
        corrected.customer_name = customer;
    }
    let payment = prompt("New payment method (blank keeps)")?;
    if !payment.is_empty() {
        corrected.payment_method = payment;
    }
    let quantity = prompt("New quantity (blank keeps)")?;
    if !quantity.is_empty() {
        match quantity.parse::<i64>() {
            Ok(qty) if qty > 0 => {
                corrected.quantity = qty;
                corrected.total_cents = corrected.unit_price_cents * qty;
            }
            _ => {
                println!("'{quantity}' is not a valid quantity");
                return Ok(());
            }
        }
    }

    match edit::edit_sale_record(state, session, index, corrected) {
        Ok(()) => println!("Sale record updated."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}
