mod csv_export;
mod text;

pub use csv_export::write_summary_csv;
pub use text::format_report;
