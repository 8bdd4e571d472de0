pub mod engine;
pub mod scheduler;

pub use engine::{SpeechEngine, SpeechRequest, SpeechSignal, UtteranceId};
pub use scheduler::PlaybackScheduler;
