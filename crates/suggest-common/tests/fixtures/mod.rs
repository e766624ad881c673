/// Title suggestions for one point of interest: two near-identical spellings
/// plus an unrelated proposal.
#[allow(dead_code)]
pub fn fountain_titles() -> Vec<&'static str> {
    vec![
        "Riverside Park Fountain",
        "Riverside Park Fountains",
        "Old Mill Bridge",
    ]
}

/// Description suggestions with two separate groups of near-duplicates.
#[allow(dead_code)]
pub fn mural_descriptions() -> Vec<&'static str> {
    vec![
        "Large mural painted on the side of the library.",
        "A bronze statue of the town founder.",
        "Large mural painted on the side of the library!",
        "A bronze statue of the town's founder.",
    ]
}

/// Three strings linked only through the middle one: the outer two are two
/// edits apart, the middle one is a single edit from each.
#[allow(dead_code)]
pub fn chained() -> Vec<&'static str> {
    vec!["abcdefghYX", "zzzzz", "abcdefghij", "abcdefghiX"]
}
