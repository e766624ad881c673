use tracing::debug;

use crate::canonical::canonical_form;
use crate::hashing::pool_id;
use crate::pooling::cluster_with_matrix;
use crate::render::render_member;
use crate::similarity::SimilarityMatrix;
use crate::types::{
    CandidateOutcome, ClusterConfig, ComparisonReport, PoolReport, RenderedMember,
};

/// Cluster the candidates and render every pooled member against its pool's
/// canonical form. Candidates outside any pool keep their original text.
pub fn compare_candidates<S: AsRef<str>>(
    strings: &[S],
    config: &ClusterConfig,
) -> ComparisonReport {
    let texts: Vec<&str> = strings.iter().map(|s| s.as_ref()).collect();
    let matrix = SimilarityMatrix::build(&texts);
    let pools = if texts.len() < 2 {
        Vec::new()
    } else {
        cluster_with_matrix(&matrix, config.threshold)
    };

    let mut candidates: Vec<CandidateOutcome> = texts
        .iter()
        .map(|&t| CandidateOutcome {
            original: t.to_string(),
            output: t.to_string(),
            pool: None,
        })
        .collect();

    let mut reports = Vec::with_capacity(pools.len());
    for (pool_index, pool) in pools.iter().enumerate() {
        let members: Vec<&str> = pool.members.iter().map(|&i| texts[i]).collect();
        let canonical = canonical_form(&members, config.granularity);
        debug!(
            "Pool {} - members={:?}, canonical_chars={}",
            pool_index,
            pool.members,
            canonical.chars().count()
        );

        let rendered: Vec<RenderedMember> = pool
            .members
            .iter()
            .map(|&index| {
                let (html, highlight_runs) = render_member(
                    &canonical,
                    texts[index],
                    config.granularity,
                    &config.highlight,
                );
                RenderedMember {
                    index,
                    html,
                    highlight_runs,
                }
            })
            .collect();

        for member in &rendered {
            let outcome = &mut candidates[member.index];
            outcome.output = member.html.clone();
            outcome.pool = Some(pool_index);
        }

        reports.push(PoolReport {
            id: pool_id(&members),
            members: pool.members.clone(),
            canonical,
            rendered,
        });
    }

    ComparisonReport {
        threshold: config.threshold.value(),
        granularity: config.granularity,
        candidates,
        pools: reports,
        similarities: matrix.pairs(),
    }
}

/// Same-length output: pooled candidates become highlighted HTML fragments,
/// everything else is returned untouched.
pub fn highlight_candidates<S: AsRef<str>>(strings: &[S], config: &ClusterConfig) -> Vec<String> {
    compare_candidates(strings, config)
        .candidates
        .into_iter()
        .map(|c| c.output)
        .collect()
}
