/// Ports module defining interfaces for hexagonal architecture
///
/// The formatter is a pure filter, so only outbound (driven) ports exist:
/// where the payload comes from, how it is rendered, and where it goes.
pub mod outbound;
