//! Signal combinations rendered into the four qualitative judgments.
//!
//! Each judgment is an ordered rule table over a baseline text. Rule order is
//! load-bearing: for memorability, `long` is listed after the `short`/`imagery`
//! rules so it always wins.

use crate::config::PracticalStyle;

use super::signals::SignalSet;

// ── Judgment texts ───────────────────────────────────────────────

const MEMORABILITY_BASELINE: &str = "The name has some memorable elements, though certain aspects of its structure may make it slightly harder to retain at first.";
const MEMORABILITY_EASY: &str =
    "The name is relatively easy to remember, supported by its structure and overall feel.";
const MEMORABILITY_IMAGERY_CLAUSE: &str = "The use of visual language supports memorability by giving the mind something concrete to hold onto.";
const MEMORABILITY_LONG: &str = "The name may be harder to remember on first exposure, as its length offers fewer natural memory anchors.";

const CLARITY_BASELINE: &str = "The name suggests a mood or style, though it may not immediately communicate what it represents without additional context.";
const CLARITY_IMAGERY: &str = "The name gives a general sense of tone or direction, helping new audiences form an initial impression.";

const PRACTICAL_BASELINE: &str =
    "There are no obvious structural concerns. The name should function smoothly in everyday use.";
const PRACTICAL_CAUTION: &str = "The name is workable in practical terms, though certain elements may require occasional clarification in spelling or wording.";
const PRACTICAL_SPELLING_CLAUSE: &str = "Some parts may be difficult to spell on first hearing, which could create minor friction in search or sharing.";
const PRACTICAL_GENERIC_CLAUSE: &str = "One or more terms are commonly used, which may reduce distinctiveness but does not prevent effective use.";
const PRACTICAL_TRENDY_CLAUSE: &str =
    "The structure follows a currently popular pattern that may date more quickly over time.";

const GUTCHECK_SOUND: &str = "Gut check: The name feels structurally sound with manageable trade-offs. It is likely workable in most contexts.";
const GUTCHECK_REFINE: &str = "Gut check: The name has several strengths, with a few areas that may benefit from refinement depending on your goals.";
const GUTCHECK_MIXED: &str = "Gut check: The name presents a mix of strengths and trade-offs. It is usable as-is, though adjustments could improve clarity or memorability.";

// ── Rule table ───────────────────────────────────────────────────

// Effect — how a matched rule changes the judgment text built so far.
enum Effect {
    Overwrite(&'static str),
    Append(&'static str),
}

struct Rule {
    applies: fn(&SignalSet) -> bool,
    effect: Effect,
}

fn run(baseline: &'static str, rules: &[Rule], signals: &SignalSet) -> String {
    let mut text = String::from(baseline);
    for rule in rules {
        if (rule.applies)(signals) {
            match rule.effect {
                Effect::Overwrite(replacement) => {
                    text.clear();
                    text.push_str(replacement);
                }
                Effect::Append(clause) => {
                    text.push(' ');
                    text.push_str(clause);
                }
            }
        }
    }
    text
}

const MEMORABILITY_RULES: &[Rule] = &[
    Rule {
        applies: |s| s.short || s.imagery,
        effect: Effect::Overwrite(MEMORABILITY_EASY),
    },
    Rule {
        applies: |s| s.imagery,
        effect: Effect::Append(MEMORABILITY_IMAGERY_CLAUSE),
    },
    // Listed last so length always overrides the positive branches.
    Rule {
        applies: |s| s.long,
        effect: Effect::Overwrite(MEMORABILITY_LONG),
    },
];

const CLARITY_RULES: &[Rule] = &[Rule {
    applies: |s| s.imagery,
    effect: Effect::Overwrite(CLARITY_IMAGERY),
}];

// Multi-clause style: one appended sentence per caution flag, in
// spelling, generic, trendy order.
const PRACTICAL_RULES: &[Rule] = &[
    Rule {
        applies: |s| s.spelling || s.generic || s.trendy,
        effect: Effect::Overwrite(PRACTICAL_CAUTION),
    },
    Rule {
        applies: |s| s.spelling,
        effect: Effect::Append(PRACTICAL_SPELLING_CLAUSE),
    },
    Rule {
        applies: |s| s.generic,
        effect: Effect::Append(PRACTICAL_GENERIC_CLAUSE),
    },
    Rule {
        applies: |s| s.trendy,
        effect: Effect::Append(PRACTICAL_TRENDY_CLAUSE),
    },
];

// Combined style: the caution baseline alone, no per-flag clauses.
const PRACTICAL_RULES_COMBINED: &[Rule] = &[Rule {
    applies: |s| s.spelling || s.generic || s.trendy,
    effect: Effect::Overwrite(PRACTICAL_CAUTION),
}];

// ── Public surface ───────────────────────────────────────────────

/// The four rendered judgments for one candidate.
#[derive(Debug, Clone)]
pub struct Narratives {
    pub memorability: String,
    pub clarity: String,
    pub practical: String,
    pub gutcheck: String,
}

/// Render all four judgments from a signal set. Deterministic; no state.
pub fn render(signals: &SignalSet, style: PracticalStyle) -> Narratives {
    let practical_rules = match style {
        PracticalStyle::Clauses => PRACTICAL_RULES,
        PracticalStyle::Combined => PRACTICAL_RULES_COMBINED,
    };

    Narratives {
        memorability: run(MEMORABILITY_BASELINE, MEMORABILITY_RULES, signals),
        clarity: run(CLARITY_BASELINE, CLARITY_RULES, signals),
        practical: run(PRACTICAL_BASELINE, practical_rules, signals),
        gutcheck: gutcheck(signals.caution_count()).to_string(),
    }
}

/// Three-tier overall judgment by caution count.
fn gutcheck(caution_count: u8) -> &'static str {
    match caution_count {
        0 => GUTCHECK_SOUND,
        1 => GUTCHECK_REFINE,
        _ => GUTCHECK_MIXED,
    }
}
