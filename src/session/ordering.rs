use rand::rngs::SmallRng;

use crate::session::feedback::FeedbackSink;
use crate::session::shuffle::fisher_yates;

/// One pool/selection unit: a stable positional id paired with immutable
/// line text. Tokens are created once per drill session and only ever move
/// between the pool and the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub id: usize,
    pub text: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrillResult {
    #[default]
    Unset,
    Correct,
    Incorrect,
}

/// Which collection a pick targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Pool,
    Selected,
}

/// State machine for one dialogue-ordering drill: the learner moves tokens
/// from a shuffled pool into an ordered selection and verifies the result.
/// Replayable indefinitely via [`OrderingDrill::reset`].
pub struct OrderingDrill {
    lines: Vec<String>,
    pub reference: Vec<String>,
    pub pool: Vec<Token>,
    pub selected: Vec<Token>,
    pub result: DrillResult,
}

impl OrderingDrill {
    /// Start a drill over `lines`. Callers guarantee at least two lines
    /// (the resolver never emits fewer).
    pub fn new(lines: &[String], rng: &mut SmallRng) -> Self {
        let mut drill = Self {
            lines: lines.to_vec(),
            reference: lines.iter().map(|l| l.trim().to_string()).collect(),
            pool: Vec::new(),
            selected: Vec::new(),
            result: DrillResult::Unset,
        };
        drill.deal(rng);
        drill
    }

    fn deal(&mut self, rng: &mut SmallRng) {
        let mut tokens: Vec<Token> = self
            .lines
            .iter()
            .enumerate()
            .map(|(id, text)| Token {
                id,
                text: text.clone(),
            })
            .collect();
        fisher_yates(&mut tokens, rng);
        self.pool = tokens;
        self.selected = Vec::new();
        self.result = DrillResult::Unset;
    }

    /// Move the identified token out of `source` into the other collection.
    /// Pool picks append to the end of the selection; selection picks return
    /// the token to the pool (position irrelevant). Any pick invalidates a
    /// prior verification.
    ///
    /// A token id missing from the named source is a caller bug: tokens only
    /// ever originate from this drill, so the id must be wherever the caller
    /// last saw it.
    pub fn pick(&mut self, token_id: usize, source: Source) {
        self.result = DrillResult::Unset;
        let (from, to) = match source {
            Source::Pool => (&mut self.pool, &mut self.selected),
            Source::Selected => (&mut self.selected, &mut self.pool),
        };
        let pos = from.iter().position(|t| t.id == token_id);
        debug_assert!(pos.is_some(), "token {token_id} not in {source:?}");
        if let Some(pos) = pos {
            let token = from.remove(pos);
            to.push(token);
        }
    }

    /// Compare the selection (trimmed, in order) against the reference.
    /// Sets `result` and fires exactly one feedback notification.
    pub fn verify(&mut self, feedback: &mut dyn FeedbackSink) -> bool {
        let ok = self.selected.len() == self.reference.len()
            && self
                .selected
                .iter()
                .zip(&self.reference)
                .all(|(token, line)| token.text.trim() == line);
        self.result = if ok {
            DrillResult::Correct
        } else {
            DrillResult::Incorrect
        };
        if ok {
            feedback.on_correct();
        } else {
            feedback.on_incorrect();
        }
        ok
    }

    /// Back to the initial state: same tokens, fresh independent shuffle.
    /// A repeat permutation (including the solved order) is acceptable.
    pub fn reset(&mut self, rng: &mut SmallRng) {
        self.deal(rng);
    }
}
