/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, Graphviz, console, report formats).
pub mod descriptor_reader;
pub mod descriptor_scanner;
pub mod image_renderer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod report_writer;

pub use descriptor_reader::DescriptorReader;
pub use descriptor_scanner::DescriptorScanner;
pub use image_renderer::ImageRenderer;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use report_writer::ReportWriter;
