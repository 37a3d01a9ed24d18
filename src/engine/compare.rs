//! Two-candidate comparison and the shared tie-break policy.

use super::signals::SignalSet;

// Candidate — which of the two inputs a verdict points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    A,
    B,
}

// Verdict — outcome of the tie-break policy, with the reason it was reached.
//
// Both the summary text and the preferred-name pick derive from one verdict,
// so the candidate named in the summary always matches the one returned by
// [`pick_better_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Strictly fewer caution signals.
    FewerCautions(Candidate),
    /// Caution counts tied; exactly one candidate is short.
    ShorterName(Candidate),
    /// Fully tied. `pick_better_name` defaults to candidate A here.
    Tie,
}

/// Apply the tie-break policy, in order: caution count, then shortness.
pub fn decide(a: &SignalSet, b: &SignalSet) -> Verdict {
    use std::cmp::Ordering;

    match a.caution_count().cmp(&b.caution_count()) {
        Ordering::Less => Verdict::FewerCautions(Candidate::A),
        Ordering::Greater => Verdict::FewerCautions(Candidate::B),
        Ordering::Equal => {
            if a.short && !b.short {
                Verdict::ShorterName(Candidate::A)
            } else if b.short && !a.short {
                Verdict::ShorterName(Candidate::B)
            } else {
                Verdict::Tie
            }
        }
    }
}

/// Comparative narrative for two evaluated candidates.
pub fn compare_summary(name_a: &str, a: &SignalSet, name_b: &str, b: &SignalSet) -> String {
    match decide(a, b) {
        Verdict::FewerCautions(winner) => {
            let name = pick(winner, name_a, name_b);
            format!(
                "Between the two, \"{name}\" appears structurally smoother with fewer practical trade-offs."
            )
        }
        Verdict::ShorterName(winner) => {
            let name = pick(winner, name_a, name_b);
            format!(
                "Both options are broadly workable. \"{name}\" may be slightly easier to use and remember in everyday contexts."
            )
        }
        Verdict::Tie => String::from(
            "Both options appear structurally similar. The better choice may depend on audience fit and how you plan to present it.",
        ),
    }
}

/// The candidate the next-step links should use. On a full tie this defaults
/// to the first candidate.
pub fn pick_better_name<'a>(
    name_a: &'a str,
    a: &SignalSet,
    name_b: &'a str,
    b: &SignalSet,
) -> &'a str {
    match decide(a, b) {
        Verdict::FewerCautions(winner) | Verdict::ShorterName(winner) => {
            pick(winner, name_a, name_b)
        }
        Verdict::Tie => name_a,
    }
}

fn pick<'a>(winner: Candidate, name_a: &'a str, name_b: &'a str) -> &'a str {
    match winner {
        Candidate::A => name_a,
        Candidate::B => name_b,
    }
}
