/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with stdin, files, stdout and stderr.
pub mod outbound;
