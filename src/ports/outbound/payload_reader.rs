use crate::shared::Result;

/// PayloadReader port for obtaining the raw issues search response
///
/// Implementations read their source to completion; parsing happens later
/// so that nothing is written before the whole document is known to be valid.
pub trait PayloadReader {
    /// Reads the complete payload as bytes
    ///
    /// # Errors
    /// Returns an error if the source cannot be opened or read
    fn read_payload(&self) -> Result<Vec<u8>>;

    /// Human-readable name of the source, used in progress messages
    fn source_name(&self) -> String;
}
