// ============================================================
// Layer 5 — Arbitration Engine
// ============================================================
// Folds the three pairwise verdicts into one label. A label is
// accepted only when both pairs that can see it agree on it:
//
//   1. positive/neutral = NEUTRAL  and negative/neutral = NEUTRAL  → NEUTRAL
//   2. positive/neutral = POSITIVE and positive/negative = POSITIVE → POSITIVE
//   3. negative/neutral = NEGATIVE and positive/negative = NEGATIVE → NEGATIVE
//   4. otherwise                                                   → NEUTRAL
//
// First match wins. Total over every input, including verdicts a
// pair could never produce.

use crate::domain::example::Verdicts;
use crate::domain::label::Label;

pub fn arbitrate(pos_neg: Label, pos_neu: Label, neg_neu: Label) -> Label {
    if pos_neu == Label::Neutral && neg_neu == Label::Neutral {
        Label::Neutral
    } else if pos_neu == Label::Positive && pos_neg == Label::Positive {
        Label::Positive
    } else if neg_neu == Label::Negative && pos_neg == Label::Negative {
        Label::Negative
    } else {
        Label::Neutral
    }
}

impl Verdicts {
    pub fn arbitrate(&self) -> Label {
        arbitrate(self.positive_negative, self.positive_neutral, self.negative_neutral)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::label::Label::{Negative as NEG, Neutral as NEU, Positive as POS};

    #[test]
    fn test_all_eight_combinations() {
        // (pos_neg, pos_neu, neg_neu) → expected
        let table = [
            ((POS, POS, NEG), POS),
            ((POS, POS, NEU), POS),
            ((POS, NEU, NEG), NEU),
            ((POS, NEU, NEU), NEU),
            ((NEG, POS, NEG), NEG),
            ((NEG, POS, NEU), NEU),
            ((NEG, NEU, NEG), NEG),
            ((NEG, NEU, NEU), NEU),
        ];
        for ((pos_neg, pos_neu, neg_neu), expected) in table {
            assert_eq!(
                arbitrate(pos_neg, pos_neu, neg_neu),
                expected,
                "pos_neg={pos_neg} pos_neu={pos_neu} neg_neu={neg_neu}"
            );
        }
    }

    #[test]
    fn test_neutral_agreement_beats_everything() {
        for pos_neg in [POS, NEG] {
            assert_eq!(arbitrate(pos_neg, NEU, NEU), NEU);
        }
    }

    #[test]
    fn test_no_agreement_defaults_to_neutral() {
        assert_eq!(arbitrate(NEG, POS, NEU), NEU);
        assert_eq!(arbitrate(POS, NEU, NEG), NEU);
    }

    #[test]
    fn test_negative_needs_both_negative_sensitive_pairs() {
        // positive/neutral leaning POSITIVE does not block rule 3
        assert_eq!(arbitrate(NEG, POS, NEG), NEG);
        assert_eq!(arbitrate(POS, POS, NEG), POS);
    }

    #[test]
    fn test_out_of_domain_verdicts_do_not_panic() {
        for a in Label::ALL {
            for b in Label::ALL {
                for c in Label::ALL {
                    let _ = arbitrate(a, b, c);
                }
            }
        }
        assert_eq!(arbitrate(NEU, NEG, POS), NEU);
    }

    #[test]
    fn test_verdicts_method_matches_function() {
        let v = Verdicts {
            positive_negative: POS,
            positive_neutral: POS,
            negative_neutral: NEU,
        };
        assert_eq!(v.arbitrate(), POS);
    }
}
