/// Mock implementations for testing
mod mock_descriptor_source;
mod mock_image_renderer;
mod mock_progress_reporter;
mod mock_report_writer;

pub use mock_descriptor_source::{MockDescriptorReader, MockDescriptorScanner};
pub use mock_image_renderer::MockImageRenderer;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_writer::MockReportWriter;
