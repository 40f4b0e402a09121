//! Deterministic "top candidate" selection

use std::cmp::Ordering;

use crate::traits::Candidate;
use crate::utils::normalize::{finite_amount, stable_id};

/// Ranking key of a single candidate
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRank {
    /// Amount after normalization, always finite
    pub amount: f64,
    /// Lowercase `:`-joined identity tuple
    pub stable_id: String,
}

impl CandidateRank {
    /// Higher amount first, then ascending stable id
    pub fn precedence(&self, other: &Self) -> Ordering {
        // Both amounts are finite, so partial_cmp only sees comparable values
        // and treats -0.0 and 0.0 as equal.
        other
            .amount
            .partial_cmp(&self.amount)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.stable_id.cmp(&other.stable_id))
    }
}

/// Stable identity string of a candidate
pub fn stable_id_of<T: Candidate>(candidate: &T) -> String {
    stable_id(candidate.identity_parts())
}

/// Ranking key of a candidate
pub fn rank_of<T: Candidate>(candidate: &T) -> CandidateRank {
    CandidateRank {
        amount: finite_amount(candidate.amount()),
        stable_id: stable_id_of(candidate),
    }
}

/// Pick the winning candidate using caller-supplied identity and amount accessors.
///
/// The winner has the largest normalized amount; equal amounts fall back to
/// the lexicographically smallest stable id. Returns `None` for an empty slice.
pub fn pick_top_candidate_by<'a, T, I, S, P, A>(
    candidates: &'a [T],
    identity: P,
    amount: A,
) -> Option<&'a T>
where
    P: Fn(&T) -> I,
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
    A: Fn(&T) -> Option<f64>,
{
    let winner = candidates
        .iter()
        .map(|candidate| {
            let rank = CandidateRank {
                amount: finite_amount(amount(candidate)),
                stable_id: stable_id(identity(candidate)),
            };
            (rank, candidate)
        })
        .min_by(|(a, _), (b, _)| a.precedence(b));

    match winner {
        Some((rank, candidate)) => {
            tracing::debug!(
                candidates = candidates.len(),
                amount = rank.amount,
                stable_id = %rank.stable_id,
                "selected top candidate"
            );
            Some(candidate)
        }
        None => None,
    }
}

/// Pick the winning candidate of any [`Candidate`] type
pub fn pick_top_candidate<T: Candidate>(candidates: &[T]) -> Option<&T> {
    pick_top_candidate_by(candidates, |c| c.identity_parts(), |c| c.amount())
}

/// All candidates in precedence order, winner first
pub fn rank_candidates<T: Candidate>(candidates: &[T]) -> Vec<&T> {
    let mut ranked: Vec<(CandidateRank, &T)> =
        candidates.iter().map(|c| (rank_of(c), c)).collect();
    ranked.sort_by(|(a, _), (b, _)| a.precedence(b));
    ranked.into_iter().map(|(_, c)| c).collect()
}
