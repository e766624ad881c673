mod fixtures;

use suggest_common::types::{ClusterConfig, Granularity, Threshold};
use suggest_common::{compare_candidates, highlight_candidates};

fn word_config() -> ClusterConfig {
    ClusterConfig {
        granularity: Granularity::Word,
        ..ClusterConfig::default()
    }
}

#[test]
fn empty_input_is_a_no_op() {
    let out = highlight_candidates::<&str>(&[], &ClusterConfig::default());
    assert!(out.is_empty());
    let report = compare_candidates::<&str>(&[], &ClusterConfig::default());
    assert!(report.pools.is_empty());
    assert!(report.similarities.is_empty());
}

#[test]
fn single_input_is_returned_verbatim() {
    let out = highlight_candidates(&["<b>Tom & Jerry</b>"], &ClusterConfig::default());
    assert_eq!(out, vec!["<b>Tom & Jerry</b>"]);
}

#[test]
fn pooled_members_are_rendered_and_others_untouched() {
    let out = highlight_candidates(
        &["foo bar", "foo baz", "<i>unrelated</i>"],
        &ClusterConfig::default(),
    );
    assert_eq!(
        out,
        vec![
            r#"foo ba<span class="suggest-diff-added">r</span>"#.to_string(),
            r#"foo ba<span class="suggest-diff-added">z</span>"#.to_string(),
            "<i>unrelated</i>".to_string(),
        ]
    );
}

#[test]
fn word_granularity_highlights_whole_suffix_word() {
    let report = compare_candidates(&["foo bar", "foo baz"], &word_config());
    assert_eq!(report.pools.len(), 1);
    let pool = &report.pools[0];
    assert_eq!(pool.canonical, "foo ");
    assert_eq!(pool.rendered[0].highlight_runs, vec!["bar"]);
    assert_eq!(pool.rendered[1].highlight_runs, vec!["baz"]);
    assert!(pool.rendered[0].html.starts_with("foo <span"));
}

#[test]
fn identical_pool_has_no_highlights() {
    let report = compare_candidates(
        &["hello world", "hello world", "goodbye"],
        &ClusterConfig::default(),
    );
    assert_eq!(report.pools.len(), 1);
    let pool = &report.pools[0];
    assert_eq!(pool.members, vec![0, 1]);
    assert_eq!(pool.canonical, "hello world");
    for member in &pool.rendered {
        assert!(member.highlight_runs.is_empty());
        assert_eq!(member.html, "hello world");
    }
    assert_eq!(report.candidates[2].output, "goodbye");
    assert_eq!(report.candidates[2].pool, None);
}

#[test]
fn report_links_candidates_to_pools() {
    let titles = fixtures::fountain_titles();
    let report = compare_candidates(&titles, &ClusterConfig::default());

    assert_eq!(report.threshold, 0.85);
    assert_eq!(report.granularity, Granularity::Char);
    assert_eq!(report.similarities.len(), 3);
    assert_eq!(report.pools.len(), 1);

    let pool = &report.pools[0];
    assert_eq!(pool.members, vec![0, 1]);
    assert_eq!(pool.canonical, "Riverside Park Fountain");
    assert_eq!(pool.id.len(), 16);
    assert!(pool.rendered[0].highlight_runs.is_empty());
    assert_eq!(pool.rendered[1].highlight_runs, vec!["s"]);

    let pools: Vec<Option<usize>> = report.candidates.iter().map(|c| c.pool).collect();
    assert_eq!(pools, vec![Some(0), Some(0), None]);
    for (candidate, original) in report.candidates.iter().zip(&titles) {
        assert_eq!(candidate.original, *original);
    }
}

#[test]
fn two_pools_render_independently() {
    let descriptions = fixtures::mural_descriptions();
    let report = compare_candidates(&descriptions, &ClusterConfig::default());
    assert_eq!(report.pools.len(), 2);
    assert_ne!(report.pools[0].id, report.pools[1].id);

    let statue = &report.pools[1];
    assert_eq!(statue.members, vec![1, 3]);
    assert_eq!(statue.canonical, "A bronze statue of the town founder.");
    assert_eq!(statue.rendered[1].highlight_runs, vec!["'s"]);
    assert_eq!(
        report.candidates[3].output,
        r#"A bronze statue of the town<span class="suggest-diff-added">&#39;s</span> founder."#
    );
}

#[test]
fn raising_threshold_splits_pools() {
    let config = ClusterConfig {
        threshold: Threshold::new(0.99).unwrap(),
        ..ClusterConfig::default()
    };
    let out = highlight_candidates(&["foo bar", "foo baz"], &config);
    assert_eq!(out, vec!["foo bar", "foo baz"]);
}

#[test]
fn repeated_runs_are_identical() {
    let descriptions = fixtures::mural_descriptions();
    let first = compare_candidates(&descriptions, &ClusterConfig::default());
    let second = compare_candidates(&descriptions, &ClusterConfig::default());
    assert_eq!(first, second);
    assert_eq!(
        highlight_candidates(&descriptions, &word_config()),
        highlight_candidates(&descriptions, &word_config())
    );
}
