//! Answer grading for typed translations.
//!
//! A typed answer is normalized (case, accents, whitespace), compared by
//! Levenshtein distance against the canonical answer and every alternate,
//! and the closest candidate decides the verdict.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Outcome of grading a typed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    Correct,
    /// Within typo tolerance of an accepted answer.
    Almost,
    Incorrect,
}

impl VerdictKind {
    /// Whether the answer counts towards the score (correct or a tolerated typo).
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Correct | Self::Almost)
    }
}

/// Which accepted answer produced the best match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "snake_case")]
pub enum MatchedCandidate {
    Canonical,
    /// Position in the alternates list.
    Alternate(usize),
}

/// Result of grading a typed answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub kind: VerdictKind,
    /// Edit distance to the best-matching candidate.
    pub distance: usize,
    /// Normalized form of the best-matching candidate.
    pub matched: String,
    pub candidate: MatchedCandidate,
}

/// Typo tolerance thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingPolicy {
    /// Largest distance still classified as `Almost`.
    pub max_typo_distance: usize,
    /// Shortest canonical answer (in characters) eligible for typo tolerance.
    pub min_typo_length: usize,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            max_typo_distance: 2,
            min_typo_length: 4,
        }
    }
}

impl GradingPolicy {
    /// Classify a minimum distance against the raw length of the canonical answer.
    pub fn classify(&self, distance: usize, canonical_len: usize) -> VerdictKind {
        if distance == 0 {
            VerdictKind::Correct
        } else if distance <= self.max_typo_distance && canonical_len >= self.min_typo_length {
            VerdictKind::Almost
        } else {
            VerdictKind::Incorrect
        }
    }
}

/// Grade a typed answer with the default policy.
pub fn grade(input: &str, correct: &str, alternates: &[String]) -> Verdict {
    grade_with_policy(input, correct, alternates, &GradingPolicy::default())
}

/// Grade a typed answer against the canonical answer and its alternates.
///
/// Ties on distance go to the earliest candidate, so the canonical answer
/// wins over any alternate and earlier alternates win over later ones.
pub fn grade_with_policy(
    input: &str,
    correct: &str,
    alternates: &[String],
    policy: &GradingPolicy,
) -> Verdict {
    let input = normalize(input);

    let matched = normalize(correct);
    let mut distance = levenshtein_distance(&input, &matched);
    let mut best = (MatchedCandidate::Canonical, matched);

    for (index, alternate) in alternates.iter().enumerate() {
        if distance == 0 {
            break;
        }
        let normalized = normalize(alternate);
        let candidate_distance = levenshtein_distance(&input, &normalized);
        if candidate_distance < distance {
            distance = candidate_distance;
            best = (MatchedCandidate::Alternate(index), normalized);
        }
    }

    let (candidate, matched) = best;
    Verdict {
        kind: policy.classify(distance, correct.chars().count()),
        distance,
        matched,
        candidate,
    }
}

/// Normalize text for comparison: lower-case, strip accents, trim and
/// collapse whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining Diacritical Marks block (U+0300..U+036F).
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    let mut matrix = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            matrix[i][j] = (matrix[i - 1][j] + 1) // deletion
                .min(matrix[i][j - 1] + 1) // insertion
                .min(matrix[i - 1][j - 1] + cost); // substitution
        }
    }

    matrix[m][n]
}
