pub mod csv_report;
pub mod model;
pub mod service;
pub mod xlsx_report;
