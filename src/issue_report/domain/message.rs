use std::borrow::Cow;

/// Longest message, in characters, shown in a table cell without truncation
pub const MAX_MESSAGE_CHARS: usize = 60;

const ELLIPSIS: &str = "...";

/// Shortens a message to `MAX_MESSAGE_CHARS` characters plus an ellipsis
///
/// Counts Unicode scalar values, so multi-byte text is never split mid-character.
pub fn truncate_message(message: &str) -> Cow<'_, str> {
    match message.char_indices().nth(MAX_MESSAGE_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &message[..cut], ELLIPSIS)),
        None => Cow::Borrowed(message),
    }
}
