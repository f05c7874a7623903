/// HipChat rejects room notifications longer than this.
pub const MAX_MESSAGE_LENGTH: usize = 10_000;
const MAX_ERROR_LENGTH: usize = 2_000;

pub fn truncate_message(message: &str) -> String {
    truncate_chars(message, MAX_MESSAGE_LENGTH)
}

pub fn truncate_error(error: &str) -> String {
    truncate_chars(error, MAX_ERROR_LENGTH)
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
