use similar::{ChangeTag, TextDiff};

use crate::types::Granularity;

/// Three-way tag on a diff segment, from the point of view of `new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffOp {
    Added,
    Removed,
    Unchanged,
}

/// A run of text sharing one tag. Adjacent segments never share a tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffSegment {
    pub op: DiffOp,
    pub text: String,
}

/// Myers diff of `old` against `new`, coalesced into tagged runs.
pub fn diff(old: &str, new: &str, granularity: Granularity) -> Vec<DiffSegment> {
    let text_diff = match granularity {
        Granularity::Char => TextDiff::from_chars(old, new),
        Granularity::Word => TextDiff::from_words(old, new),
    };

    let mut segments: Vec<DiffSegment> = Vec::new();
    for change in text_diff.iter_all_changes() {
        let op = match change.tag() {
            ChangeTag::Insert => DiffOp::Added,
            ChangeTag::Delete => DiffOp::Removed,
            ChangeTag::Equal => DiffOp::Unchanged,
        };
        match segments.last_mut() {
            Some(last) if last.op == op => last.text.push_str(change.value()),
            _ => segments.push(DiffSegment {
                op,
                text: change.value().to_string(),
            }),
        }
    }
    segments
}

/// Keep only the text both sides agree on.
pub fn common_text(old: &str, new: &str, granularity: Granularity) -> String {
    diff(old, new, granularity)
        .into_iter()
        .filter(|s| s.op == DiffOp::Unchanged)
        .map(|s| s.text)
        .collect()
}

/// Fold the members, in the order given, into the text they all share.
///
/// This is a sequential intersection: the result after member `k` only
/// reflects agreement between the running canonical and member `k`, so the
/// order matters. Pools pass their members in ascending index order.
pub fn canonical_form<S: AsRef<str>>(members: &[S], granularity: Granularity) -> String {
    let Some((first, rest)) = members.split_first() else {
        return String::new();
    };
    rest.iter().fold(first.as_ref().to_string(), |canonical, member| {
        common_text(&canonical, member.as_ref(), granularity)
    })
}
