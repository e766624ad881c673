use crate::distance::distance;
use crate::types::PairScore;

/// Normalized similarity: `1 - distance / max(len)`, lengths in chars.
/// Two empty strings count as identical (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - distance(a, b) as f64 / max_len as f64
}

/// Upper-triangular pairwise similarity table for one candidate list.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    // row-major packed upper triangle, i < j
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn build<S: AsRef<str>>(strings: &[S]) -> Self {
        let size = strings.len();
        let mut scores = Vec::with_capacity(size * size.saturating_sub(1) / 2);
        for i in 0..size {
            for j in (i + 1)..size {
                scores.push(similarity(strings[i].as_ref(), strings[j].as_ref()));
            }
        }
        Self { size, scores }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Score between `i` and `j` in either order. The diagonal is 1.0.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 1.0;
        }
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        self.scores[self.offset(lo, hi)]
    }

    fn offset(&self, lo: usize, hi: usize) -> usize {
        // rows before `lo` hold (size-1) + (size-2) + ... + (size-lo) entries
        lo * (2 * self.size - lo - 1) / 2 + (hi - lo - 1)
    }

    pub fn pairs(&self) -> Vec<PairScore> {
        let mut out = Vec::with_capacity(self.scores.len());
        for left in 0..self.size {
            for right in (left + 1)..self.size {
                out.push(PairScore {
                    left,
                    right,
                    score: self.get(left, right),
                });
            }
        }
        out
    }
}
