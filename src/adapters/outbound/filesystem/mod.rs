/// Filesystem and standard-stream adapters for payload input and report output
mod file_reader;
mod file_writer;

pub use file_reader::{FileSystemReader, StdinReader};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
