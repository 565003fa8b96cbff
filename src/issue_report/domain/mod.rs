pub mod component_index;
pub mod message;
pub mod response;
pub mod scope_label;

pub use component_index::ComponentIndex;
pub use message::{truncate_message, MAX_MESSAGE_CHARS};
pub use response::{Component, Impact, Issue, IssuesResponse, UNKNOWN_VALUE};
pub use scope_label::ScopeLabel;
