//! HTML rendering of the payroll index page.

use askama::Template;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::models::{PayrollEntry, PayrollReport, PayrollSummary};

use super::format_amount;

/// Bytes escaped when an employee ID is placed in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encodes an employee ID for use as a single URL path segment.
pub fn encode_path_segment(employee_id: &str) -> String {
    utf8_percent_encode(employee_id, PATH_SEGMENT).to_string()
}

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// The operation succeeded.
    Success,
    /// The operation was rejected.
    Error,
}

impl NoticeKind {
    /// CSS class used when rendering the notice.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice-success",
            NoticeKind::Error => "notice-error",
        }
    }
}

/// A one-shot message shown on the next page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Success or error.
    pub kind: NoticeKind,
    /// The message text.
    pub message: String,
}

impl Notice {
    /// A success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// An error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// One table row on the index page, with amounts pre-formatted.
#[derive(Debug, Clone)]
pub struct EmployeeRow {
    /// The employee's ID as displayed.
    pub employee_id: String,
    /// The ID percent-encoded for use in links.
    pub encoded_id: String,
    /// The employee's name.
    pub name: String,
    /// The employee's department.
    pub department: String,
    /// Total hours worked.
    pub hours: String,
    /// Hours paid at the ordinary rate.
    pub regular_hours: String,
    /// Hours paid at the overtime rate.
    pub overtime_hours: String,
    /// Hourly rate.
    pub rate: String,
    /// Pay for regular hours.
    pub base_pay: String,
    /// Pay for overtime hours.
    pub overtime_pay: String,
    /// Allowances.
    pub allowances: String,
    /// Deductions.
    pub deductions: String,
    /// Gross pay.
    pub gross_pay: String,
    /// Net pay.
    pub net_pay: String,
}

impl From<&PayrollEntry> for EmployeeRow {
    fn from(entry: &PayrollEntry) -> Self {
        let pay = &entry.breakdown;
        Self {
            employee_id: entry.employee_id.clone(),
            encoded_id: encode_path_segment(&entry.employee_id),
            name: entry.name.clone(),
            department: entry.department.clone(),
            hours: format_amount(entry.hours),
            regular_hours: format_amount(pay.regular_hours),
            overtime_hours: format_amount(pay.overtime_hours),
            rate: format_amount(entry.rate),
            base_pay: format_amount(pay.base_pay),
            overtime_pay: format_amount(pay.overtime_pay),
            allowances: format_amount(pay.allowances),
            deductions: format_amount(pay.deductions),
            gross_pay: format_amount(pay.gross_pay),
            net_pay: format_amount(pay.net_pay),
        }
    }
}

/// View model for the index page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexView {
    /// Notices queued since the last render.
    pub notices: Vec<Notice>,
    /// One row per employee, ordered by ID.
    pub rows: Vec<EmployeeRow>,
    /// Number of employees.
    pub employee_count: usize,
    /// Sum of hours worked.
    pub total_hours: String,
    /// Sum of gross pay.
    pub gross_total: String,
    /// Sum of net pay.
    pub net_total: String,
    /// Mean hourly rate.
    pub average_rate: String,
}

impl IndexView {
    /// Builds the view from a payroll report, its summary and the pending
    /// notices.
    pub fn new(report: &PayrollReport, summary: &PayrollSummary, notices: Vec<Notice>) -> Self {
        Self {
            notices,
            rows: report.entries.iter().map(EmployeeRow::from).collect(),
            employee_count: summary.employee_count,
            total_hours: format_amount(summary.total_hours),
            gross_total: format_amount(summary.gross_total),
            net_total: format_amount(summary.net_total),
            average_rate: format_amount(summary.average_rate),
        }
    }
}

/// Renders the index page.
pub fn render_index(
    report: &PayrollReport,
    summary: &PayrollSummary,
    notices: Vec<Notice>,
) -> askama::Result<String> {
    IndexView::new(report, summary, notices).render()
}
