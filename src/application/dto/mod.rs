/// Data Transfer Objects for the application layer
mod image_format;
mod report_request;
mod report_summary;

pub use image_format::{ImageFormat, SUPPORTED_IMAGE_FORMATS};
pub use report_request::{ReportOptions, ReportRequest, ScanLayout};
pub use report_summary::ReportSummary;
