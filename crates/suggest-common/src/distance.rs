/// Diagonal value above which the table fill is abandoned.
pub const DIAGONAL_CUTOFF: usize = 4;

/// Damerau-Levenshtein (optimal string alignment) distance over chars.
///
/// Counts insertions, deletions, substitutions and adjacent transpositions.
/// When a cell on the main diagonal (`i == j`) exceeds [`DIAGONAL_CUTOFF`],
/// the fill stops and `len(a)` is returned as a "maximally dissimilar"
/// estimate. That estimate can be larger than the true distance and is not
/// symmetric; callers rely on this exact behavior.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let cols = b.len() + 1;
    let mut table = vec![0usize; (a.len() + 1) * cols];
    let at = |i: usize, j: usize| i * cols + j;

    for i in 0..=a.len() {
        table[at(i, 0)] = i;
    }
    for j in 0..=b.len() {
        table[at(0, j)] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut cell = (table[at(i - 1, j)] + 1)
                .min(table[at(i, j - 1)] + 1)
                .min(table[at(i - 1, j - 1)] + cost);

            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                cell = cell.min(table[at(i - 2, j - 2)] + cost);
            }
            table[at(i, j)] = cell;

            if i == j && cell > DIAGONAL_CUTOFF {
                return a.len();
            }
        }
    }

    table[at(a.len(), b.len())]
}

