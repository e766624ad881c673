use unicode_normalization::UnicodeNormalization;

/// Which form field a candidate was extracted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateKind {
    Title,
    Description,
}

impl CandidateKind {
    pub fn max_chars(self) -> usize {
        match self {
            CandidateKind::Title => 256,
            CandidateKind::Description => 1024,
        }
    }
}

/// Strip BOMs, then apply NFC, collapse any whitespace run to one space and trim.
pub fn normalize_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars().filter(|&c| c != '\u{FEFF}').nfc() {
        if c.is_whitespace() {
            pending_space = !result.is_empty();
        } else {
            if pending_space {
                result.push(' ');
                pending_space = false;
            }
            result.push(c);
        }
    }
    result
}

/// Normalize text scraped from a suggestion field and cap it at the field's
/// length limit (on a char boundary).
pub fn normalize_candidate(text: &str, kind: CandidateKind) -> String {
    let normalized = normalize_text(text);
    match normalized.char_indices().nth(kind.max_chars()) {
        Some((cut, _)) => normalized[..cut].trim_end().to_string(),
        None => normalized,
    }
}
