use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::content::schema::{LessonContent, QuizSet};
use crate::content::{resolve_quiz_sets, store};
use crate::services::achievements::{AchievementPayload, AchievementStore, MemoryAchievements};
use crate::session::feedback::CountingFeedback;
use crate::session::ordering::{OrderingDrill, Source};
use crate::session::result::DrillOutcome;
use crate::speech::{PlaybackScheduler, SpeechEngine, SpeechSignal};

const DRILL_XP: u32 = 25;

/// Everything one run of the viewer owns: the loaded lesson, its resolved
/// drills, the playback scheduler (sole owner of the speech resource), the
/// feedback tally, the achievement service, and the session history.
///
/// Drill slots are created on first access, one per resolved quiz set, and
/// dropped with the app; nothing about a drill is persisted.
pub struct App {
    pub config: Config,
    pub content: LessonContent,
    pub quiz_sets: Vec<QuizSet>,
    drills: Vec<Option<OrderingDrill>>,
    pub speech: PlaybackScheduler,
    pub feedback: CountingFeedback,
    pub achievements: MemoryAchievements,
    pub history: Vec<DrillOutcome>,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config, engine: Box<dyn SpeechEngine>) -> Result<Self> {
        let content = store::get_lesson(config.lesson)?;
        Ok(Self::with_content(config, content, engine))
    }

    pub fn with_content(
        config: Config,
        content: LessonContent,
        engine: Box<dyn SpeechEngine>,
    ) -> Self {
        let quiz_sets = resolve_quiz_sets(&content);
        let drills = quiz_sets.iter().map(|_| None).collect();
        Self {
            config,
            content,
            quiz_sets,
            drills,
            speech: PlaybackScheduler::new(engine),
            feedback: CountingFeedback::default(),
            achievements: MemoryAchievements::new(),
            history: Vec::new(),
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn drill_count(&self) -> usize {
        self.quiz_sets.len()
    }

    /// Drill in slot `index`, built lazily from its quiz set on first
    /// access. `None` for an out-of-range index.
    pub fn drill_mut(&mut self, index: usize) -> Option<&mut OrderingDrill> {
        let set = self.quiz_sets.get(index)?;
        let slot = &mut self.drills[index];
        if slot.is_none() {
            *slot = Some(OrderingDrill::new(&set.lines, &mut self.rng));
        }
        slot.as_mut()
    }

    pub fn pick(&mut self, index: usize, token_id: usize, source: Source) {
        if let Some(drill) = self.drill_mut(index) {
            drill.pick(token_id, source);
        }
    }

    /// Verify drill `index`: fires the feedback hook, records an outcome,
    /// and on success awards the drill's achievement (idempotent, so
    /// re-solving a drill never double-counts).
    pub fn verify(&mut self, index: usize) -> Option<bool> {
        self.drill_mut(index)?;
        let drill = self.drills[index].as_mut()?;
        let ok = drill.verify(&mut self.feedback);

        let title = self.quiz_sets[index].title.clone();
        self.history
            .push(DrillOutcome::new(self.content.id, index, title.clone(), ok));
        if ok {
            let id = format!("lesson:{}:drill:{}", self.content.id, index);
            self.achievements
                .award(&id, AchievementPayload { xp: DRILL_XP, label: title });
        }
        Some(ok)
    }

    pub fn reset(&mut self, index: usize) {
        self.drill_mut(index);
        let Some(drill) = self.drills.get_mut(index).and_then(Option::as_mut) else {
            return;
        };
        drill.reset(&mut self.rng);
    }

    /// Play a whole dialogue, kana lines preferred, kanji as fallback.
    pub fn play_dialogue(&mut self, index: usize) {
        let Some(dialogue) = self.content.dialogues.get(index) else {
            return;
        };
        let lines = if dialogue.kana.is_empty() {
            dialogue.kanji.clone()
        } else {
            dialogue.kana.clone()
        };
        self.speech.play_sequence(
            &lines,
            &self.config.speech_language,
            self.config.speech_rate,
        );
    }

    /// Play the reference lines of drill `index`.
    pub fn play_drill(&mut self, index: usize) {
        let Some(set) = self.quiz_sets.get(index) else {
            return;
        };
        let lines = set.lines.clone();
        self.speech
            .play_sequence(&lines, &self.config.speech_language, self.config.speech_rate);
    }

    pub fn speak(&mut self, text: &str) {
        self.speech
            .speak(text, &self.config.speech_language, self.config.speech_rate);
    }

    pub fn on_speech_signal(&mut self, signal: SpeechSignal) {
        match signal {
            SpeechSignal::Done(id) => self.speech.on_done(id),
            SpeechSignal::Error(id) => self.speech.on_error(id),
        }
    }

    /// Teardown: cancel playback so nothing keeps speaking after the
    /// screen is gone.
    pub fn shutdown(&mut self) {
        self.speech.stop();
    }
}
