/// Outcome notifications for a verified drill. The drill fires exactly one
/// of these per `verify` call and never awaits the sink.
pub trait FeedbackSink {
    fn on_correct(&mut self);
    fn on_incorrect(&mut self);
}

/// Sink that discards notifications.
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn on_correct(&mut self) {}
    fn on_incorrect(&mut self) {}
}

/// Sink that counts notifications. Used by tests and by the app to keep a
/// running tally for the session summary.
#[derive(Debug, Default)]
pub struct CountingFeedback {
    pub correct: u32,
    pub incorrect: u32,
}

impl FeedbackSink for CountingFeedback {
    fn on_correct(&mut self) {
        self.correct += 1;
    }

    fn on_incorrect(&mut self) {
        self.incorrect += 1;
    }
}
