/// Formatter adapters rendering the issue report read model
mod markdown_formatter;

pub use markdown_formatter::MarkdownTableFormatter;
