use crate::canonical::{diff, DiffOp};
use crate::types::{Granularity, HighlightStyle};

/// Escape text for use as HTML element content or a quoted attribute value.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Split `member` into runs that are either shared with `canonical` or not.
/// Text only present in `canonical` is dropped, so added runs separated by
/// nothing but removals merge into one.
fn member_runs(canonical: &str, member: &str, granularity: Granularity) -> Vec<(bool, String)> {
    let mut runs: Vec<(bool, String)> = Vec::new();
    for segment in diff(canonical, member, granularity) {
        let added = match segment.op {
            DiffOp::Added => true,
            DiffOp::Unchanged => false,
            DiffOp::Removed => continue,
        };
        match runs.last_mut() {
            Some((last_added, text)) if *last_added == added => text.push_str(&segment.text),
            _ => runs.push((added, segment.text)),
        }
    }
    runs
}

/// Render `member` as HTML and collect the raw text of its highlighted runs,
/// from a single diff against `canonical`.
pub fn render_member(
    canonical: &str,
    member: &str,
    granularity: Granularity,
    style: &HighlightStyle,
) -> (String, Vec<String>) {
    let class = escape_html(&style.class);
    let mut html = String::with_capacity(member.len() + 32);
    let mut highlighted = Vec::new();
    for (added, text) in member_runs(canonical, member, granularity) {
        if added {
            html.push_str("<span class=\"");
            html.push_str(&class);
            html.push_str("\">");
            html.push_str(&escape_html(&text));
            html.push_str("</span>");
            highlighted.push(text);
        } else {
            html.push_str(&escape_html(&text));
        }
    }
    (html, highlighted)
}

/// Render `member` as HTML, wrapping every run absent from `canonical` in a
/// highlight span.
pub fn render_highlighted(
    canonical: &str,
    member: &str,
    granularity: Granularity,
    style: &HighlightStyle,
) -> String {
    render_member(canonical, member, granularity, style).0
}

/// The raw text of each highlighted run, in order.
pub fn highlight_runs(canonical: &str, member: &str, granularity: Granularity) -> Vec<String> {
    member_runs(canonical, member, granularity)
        .into_iter()
        .filter_map(|(added, text)| added.then_some(text))
        .collect()
}
