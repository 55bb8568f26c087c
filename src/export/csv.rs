//! CSV export of a payroll report.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::PayrollReport;

/// Column headings of the payroll export, in order.
pub const CSV_HEADERS: [&str; 13] = [
    "Employee ID",
    "Name",
    "Department",
    "Hours",
    "Regular Hours",
    "Overtime Hours",
    "Hourly Rate",
    "Base Pay",
    "Overtime Pay",
    "Allowances",
    "Deductions",
    "Gross Pay",
    "Net Pay",
];

const LINE_END: &str = "\r\n";

/// Formats an amount with exactly two decimal places, rounding half away
/// from zero.
///
/// # Examples
///
/// ```
/// use payroll_ledger::export::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::from(400)), "400.00");
/// assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_row<S: AsRef<str>>(out: &mut String, fields: &[S]) {
    let line = fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
    out.push_str(LINE_END);
}

/// Renders a payroll report as CSV.
///
/// The output is a header row, one row per entry, a blank row, and a totals
/// row carrying the gross and net totals in the last two columns.
pub fn render_csv(report: &PayrollReport) -> String {
    let mut out = String::new();
    push_row(&mut out, &CSV_HEADERS);

    for entry in &report.entries {
        let pay = &entry.breakdown;
        push_row(
            &mut out,
            &[
                entry.employee_id.clone(),
                entry.name.clone(),
                entry.department.clone(),
                format_amount(entry.hours),
                format_amount(pay.regular_hours),
                format_amount(pay.overtime_hours),
                format_amount(entry.rate),
                format_amount(pay.base_pay),
                format_amount(pay.overtime_pay),
                format_amount(pay.allowances),
                format_amount(pay.deductions),
                format_amount(pay.gross_pay),
                format_amount(pay.net_pay),
            ],
        );
    }

    out.push_str(LINE_END);

    let mut totals = vec![String::new(); CSV_HEADERS.len()];
    totals[6] = "Totals".to_string();
    totals[11] = format_amount(report.totals.gross_total);
    totals[12] = format_amount(report.totals.net_total);
    push_row(&mut out, &totals);

    out
}
