use base64::{engine::general_purpose, Engine as _};

/// Encodes a string to Base64 format.
pub fn base64_encode(input: &str) -> String {
    general_purpose::STANDARD.encode(input)
}

/// Appends `=` until the length is a multiple of four.
pub fn pad_base64(input: &str) -> String {
    let mut padded = input.to_string();
    while padded.len() % 4 != 0 {
        padded.push('=');
    }
    padded
}

/// Reverses a URL-safe Base64 string to standard Base64 format.
pub fn url_safe_base64_reverse(input: &str) -> String {
    input.replace('-', "+").replace('_', "/")
}

/// Decodes a Base64 string that may be missing its padding.
///
/// Both the standard and the URL-safe alphabets are accepted. Returns `None` when
/// the input is not valid Base64 or the decoded bytes are not valid UTF-8.
pub fn base64_decode_tolerant(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let padded = pad_base64(&url_safe_base64_reverse(trimmed));

    let decoded = general_purpose::STANDARD.decode(padded).ok()?;
    String::from_utf8(decoded).ok()
}
