/// Formatters adapters for rendering Prism output
mod prism_json_formatter;

pub use prism_json_formatter::PrismJsonFormatter;
