use crate::speech::engine::{SpeechEngine, SpeechRequest, UtteranceId};

/// Single owner of the shared speech resource. Every playback request in the
/// application goes through here, so preemption is a property of the type
/// rather than a convention each call site has to remember.
///
/// A sequence is `{queue, cursor}` tagged with a generation number; any new
/// request bumps the generation, stops the engine, and starts from its own
/// index 0. Completion signals carrying a stale generation are ignored,
/// which is what keeps a superseded sequence from advancing the new one.
pub struct PlaybackScheduler {
    engine: Box<dyn SpeechEngine>,
    queue: Vec<SpeechRequest>,
    cursor: usize,
    generation: u64,
}

impl PlaybackScheduler {
    pub fn new(engine: Box<dyn SpeechEngine>) -> Self {
        Self {
            engine,
            queue: Vec::new(),
            cursor: 0,
            generation: 0,
        }
    }

    /// Play `lines` strictly in order, one utterance at a time. Preempts
    /// whatever is currently playing, no matter which call site started it.
    /// An empty slice is a no-op and does not preempt.
    pub fn play_sequence(&mut self, lines: &[String], language: &str, rate: f32) {
        if lines.is_empty() {
            return;
        }
        self.generation += 1;
        self.engine.stop();
        self.queue = lines
            .iter()
            .map(|text| SpeechRequest {
                text: text.clone(),
                language: language.to_string(),
                rate,
            })
            .collect();
        self.cursor = 0;
        self.engine
            .speak(&self.queue[0], UtteranceId(self.generation));
    }

    /// Single-utterance variant; same preemption path.
    pub fn speak(&mut self, text: &str, language: &str, rate: f32) {
        let line = [text.to_string()];
        self.play_sequence(&line, language, rate);
    }

    /// Engine finished the utterance tagged `utterance`. Advances the
    /// sequence it belongs to, unless that sequence has been superseded.
    pub fn on_done(&mut self, utterance: UtteranceId) {
        if utterance.0 != self.generation {
            return;
        }
        self.cursor += 1;
        if self.cursor < self.queue.len() {
            self.engine
                .speak(&self.queue[self.cursor], UtteranceId(self.generation));
        } else {
            // Natural end of the sequence.
            self.queue.clear();
            self.cursor = 0;
        }
    }

    /// Engine reported an error for the utterance tagged `utterance`.
    /// Live sequences abort: remaining lines are dropped, no retry. A later
    /// request starts cleanly from its own generation.
    pub fn on_error(&mut self, utterance: UtteranceId) {
        if utterance.0 != self.generation {
            return;
        }
        self.queue.clear();
        self.cursor = 0;
    }

    /// Cancel everything. Called on teardown so no utterance outlives the
    /// screen that started it.
    pub fn stop(&mut self) {
        self.generation += 1;
        self.queue.clear();
        self.cursor = 0;
        self.engine.stop();
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}
