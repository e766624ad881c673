use suggest_common::canonical::*;
use suggest_common::types::Granularity;

#[test]
fn char_diff_tags_suffix_change() {
    let segments = diff("foo bar", "foo baz", Granularity::Char);
    assert_eq!(
        segments,
        vec![
            DiffSegment {
                op: DiffOp::Unchanged,
                text: "foo ba".to_string(),
            },
            DiffSegment {
                op: DiffOp::Removed,
                text: "r".to_string(),
            },
            DiffSegment {
                op: DiffOp::Added,
                text: "z".to_string(),
            },
        ]
    );
}

#[test]
fn diff_of_identical_text_is_one_unchanged_run() {
    let segments = diff("same text", "same text", Granularity::Char);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].op, DiffOp::Unchanged);
    assert_eq!(segments[0].text, "same text");
}

#[test]
fn diff_against_empty() {
    let segments = diff("", "new", Granularity::Char);
    assert_eq!(
        segments,
        vec![DiffSegment {
            op: DiffOp::Added,
            text: "new".to_string(),
        }]
    );
    assert!(diff("", "", Granularity::Char).is_empty());
}

#[test]
fn common_text_keeps_agreement_only() {
    assert_eq!(common_text("foo bar", "foo baz", Granularity::Char), "foo ba");
    assert_eq!(common_text("foo bar", "foo baz", Granularity::Word), "foo ");
}

#[test]
fn identical_pool_canonical_is_the_shared_string() {
    let members = ["Old Mill Bridge", "Old Mill Bridge", "Old Mill Bridge"];
    assert_eq!(
        canonical_form(&members, Granularity::Char),
        "Old Mill Bridge"
    );
}

#[test]
fn canonical_of_single_member_is_itself() {
    assert_eq!(canonical_form(&["alone"], Granularity::Char), "alone");
}

#[test]
fn canonical_of_no_members_is_empty() {
    assert_eq!(canonical_form::<&str>(&[], Granularity::Char), "");
}

#[test]
fn canonical_folds_in_order() {
    let members = ["Riverside Park", "Riverside Parks", "Riverside Park!"];
    assert_eq!(canonical_form(&members, Granularity::Char), "Riverside Park");
}

#[test]
fn word_granularity_drops_whole_words() {
    let members = ["the old mill", "the new mill"];
    assert_eq!(canonical_form(&members, Granularity::Word), "the  mill");
}
