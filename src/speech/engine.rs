use std::sync::mpsc;

/// One utterance to synthesize. Built per call, never retained past it.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub language: String,
    pub rate: f32,
}

/// Tag carried by every `speak` request and echoed back on its completion
/// signal. The scheduler uses it to discard signals from superseded
/// sequences, so the value is the owning sequence's generation number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UtteranceId(pub u64);

/// Completion signals an engine delivers, exactly once per `speak` call,
/// through whatever channel the host gave it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeechSignal {
    Done(UtteranceId),
    Error(UtteranceId),
}

/// The shared synthesis resource. `stop` cancels whatever utterance is in
/// flight, engine-wide; `speak` begins one utterance and later reports it
/// via a [`SpeechSignal`]. Implementations decide how signals travel back.
pub trait SpeechEngine {
    fn stop(&mut self);
    fn speak(&mut self, request: &SpeechRequest, utterance: UtteranceId);
}

/// Engine that drops every request and never signals. Useful for headless
/// runs where audio is unwanted.
pub struct NullEngine;

impl SpeechEngine for NullEngine {
    fn stop(&mut self) {}
    fn speak(&mut self, _request: &SpeechRequest, _utterance: UtteranceId) {}
}

/// Engine that prints the line and immediately reports completion through
/// the given channel. Stands in for a real synthesizer in the terminal
/// binary; the scheduler sees the same one-signal-per-utterance discipline
/// a real engine would produce.
pub struct ConsoleEngine {
    signals: mpsc::Sender<SpeechSignal>,
}

impl ConsoleEngine {
    pub fn new(signals: mpsc::Sender<SpeechSignal>) -> Self {
        Self { signals }
    }
}

impl SpeechEngine for ConsoleEngine {
    fn stop(&mut self) {}

    fn speak(&mut self, request: &SpeechRequest, utterance: UtteranceId) {
        println!("  🔊 [{}] {}", request.language, request.text);
        // Receiver gone means the app is shutting down; nothing to do.
        let _ = self.signals.send(SpeechSignal::Done(utterance));
    }
}
