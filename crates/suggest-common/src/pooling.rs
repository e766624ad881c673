use std::collections::VecDeque;

use tracing::debug;

use crate::similarity::SimilarityMatrix;
use crate::types::{Pool, Threshold};

/// Group candidates into pools of near-duplicates.
///
/// Two candidates are linked when their similarity is strictly above the
/// threshold; pools are the connected components of that graph. Singletons
/// are dropped. Pools come out ordered by their first member and members are
/// ascending, so the result is fully determined by the input.
pub fn cluster<S: AsRef<str>>(strings: &[S], threshold: Threshold) -> Vec<Pool> {
    if strings.len() < 2 {
        return Vec::new();
    }
    let matrix = SimilarityMatrix::build(strings);
    cluster_with_matrix(&matrix, threshold)
}

/// Same as [`cluster`] over a precomputed matrix.
pub fn cluster_with_matrix(matrix: &SimilarityMatrix, threshold: Threshold) -> Vec<Pool> {
    let n = matrix.len();
    debug!(
        "Pooling started - candidates={}, threshold={}",
        n,
        threshold.value()
    );

    let mut visited = vec![false; n];
    let mut pools = Vec::new();

    for seed in 0..n {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        let mut members = vec![seed];
        let mut queue = VecDeque::from([seed]);
        while let Some(current) = queue.pop_front() {
            for next in 0..n {
                if visited[next] || matrix.get(current, next) <= threshold.value() {
                    continue;
                }
                visited[next] = true;
                members.push(next);
                queue.push_back(next);
            }
        }

        if members.len() > 1 {
            members.sort_unstable();
            pools.push(Pool { members });
        }
    }

    debug!("Pooling finished - pools={}", pools.len());
    pools
}
