/// Formatter adapters for the Markdown reports
mod markdown_formatter;

pub use markdown_formatter::MarkdownFormatter;
