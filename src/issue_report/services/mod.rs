mod payload_parser;

pub use payload_parser::PayloadParser;
