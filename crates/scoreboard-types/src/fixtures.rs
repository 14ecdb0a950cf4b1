//! Randomized fixture generators for tests (`test-helpers` feature).

use rand::Rng;
use rand::seq::SliceRandom;

/// Teams used by the generators. Names are pairwise distinct ignoring case.
pub const NATIONS: &[&str] = &[
    "Argentina", "Australia", "Belgium", "Brazil", "Cameroon", "Canada", "Croatia", "Denmark",
    "Ecuador", "England", "France", "Germany", "Ghana", "Iran", "Italy", "Japan", "Mexico",
    "Morocco", "Netherlands", "Poland", "Portugal", "Qatar", "Senegal", "Serbia", "Spain",
    "Switzerland", "Tunisia", "Uruguay", "USA", "Wales", "Korea Republic", "Saudi Arabia",
];

/// Up to `NATIONS.len() / 2` fixtures in which no team appears twice.
///
/// # Panics
/// Panics if `count` exceeds the number of disjoint pairs available.
pub fn random_fixtures<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<(String, String)> {
    assert!(
        count <= NATIONS.len() / 2,
        "at most {} disjoint fixtures available",
        NATIONS.len() / 2
    );
    let mut nations = NATIONS.to_vec();
    nations.shuffle(rng);
    nations
        .chunks_exact(2)
        .take(count)
        .map(|pair| (pair[0].to_string(), pair[1].to_string()))
        .collect()
}

/// A plausible non-negative football score pair.
pub fn random_scores<R: Rng + ?Sized>(rng: &mut R) -> (i32, i32) {
    (rng.gen_range(0..=8), rng.gen_range(0..=8))
}
