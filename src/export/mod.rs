//! Presentation of payroll data as CSV and HTML.

mod csv;
mod html;

pub use csv::{CSV_HEADERS, format_amount, render_csv};
pub use html::{EmployeeRow, IndexView, Notice, NoticeKind, encode_path_segment, render_index};
