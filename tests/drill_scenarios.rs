use rand::SeedableRng;
use rand::rngs::SmallRng;

use kaiwa::content::schema::{DialogueEntry, LessonContent, QuizSetSpec};
use kaiwa::content::{MAX_QUIZ_SETS, resolve_quiz_sets};
use kaiwa::session::feedback::CountingFeedback;
use kaiwa::session::ordering::{OrderingDrill, Source};
use kaiwa::speech::{PlaybackScheduler, SpeechEngine, SpeechRequest, UtteranceId};

use std::sync::{Arc, Mutex};

fn strings(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

fn dialogue(title: &str, kanji: &[&str]) -> DialogueEntry {
    DialogueEntry {
        title: title.to_string(),
        kana: Vec::new(),
        kanji: strings(kanji),
        translation: Vec::new(),
    }
}

// Resolution: all three sources present, in priority order.
#[test]
fn resolve_mixed_sources_in_priority_order() {
    let content = LessonContent {
        id: 1,
        title: "t".to_string(),
        quizzes: Some(vec![QuizSetSpec {
            title: None,
            lines: strings(&["a", "b"]),
        }]),
        quiz_lines: Some(strings(&["x", "y"])),
        dialogues: vec![dialogue("d", &["p", "q", "r"])],
        ..Default::default()
    };
    let sets = resolve_quiz_sets(&content);
    assert_eq!(sets.len(), 3);
    assert_eq!(sets[0].lines, strings(&["a", "b"]));
    assert_eq!(sets[1].lines, strings(&["x", "y"]));
    assert_eq!(sets[2].lines, strings(&["p", "q", "r"]));
}

// Resolution: a single-line dialogue cannot make an ordering puzzle.
#[test]
fn resolve_single_line_dialogue_yields_nothing() {
    let content = LessonContent {
        id: 1,
        title: "t".to_string(),
        dialogues: vec![dialogue("d", &["only one"])],
        ..Default::default()
    };
    assert!(resolve_quiz_sets(&content).is_empty());
}

// Resolution: seven eligible dialogues, only the first six survive the cap.
#[test]
fn resolve_caps_auto_derived_dialogues_at_six() {
    let content = LessonContent {
        id: 1,
        title: "t".to_string(),
        dialogues: (0..7)
            .map(|i| dialogue(&format!("d{i}"), &["one", "two"]))
            .collect(),
        ..Default::default()
    };
    let sets = resolve_quiz_sets(&content);
    assert_eq!(sets.len(), MAX_QUIZ_SETS);
    assert_eq!(sets[0].title.as_deref(), Some("d0"));
    assert_eq!(sets[5].title.as_deref(), Some("d5"));
}

// Drill: selecting in the wrong order verifies false.
#[test]
fn drill_wrong_order_is_incorrect() {
    let lines = strings(&["A: すみません。", "B: はい。", "A: ありがとう。"]);
    let mut rng = SmallRng::seed_from_u64(7);
    let mut drill = OrderingDrill::new(&lines, &mut rng);
    for id in [1, 0, 2] {
        drill.pick(id, Source::Pool);
    }
    let mut feedback = CountingFeedback::default();
    assert!(!drill.verify(&mut feedback));
    assert_eq!(feedback.incorrect, 1);
}

// Drill: selecting in the original order verifies true and fires the
// correct-feedback hook exactly once.
#[test]
fn drill_original_order_is_correct() {
    let lines = strings(&["A: すみません。", "B: はい。", "A: ありがとう。"]);
    let mut rng = SmallRng::seed_from_u64(7);
    let mut drill = OrderingDrill::new(&lines, &mut rng);
    for id in [0, 1, 2] {
        drill.pick(id, Source::Pool);
    }
    let mut feedback = CountingFeedback::default();
    assert!(drill.verify(&mut feedback));
    assert_eq!(feedback.correct, 1);
    assert_eq!(feedback.incorrect, 0);
}

// End to end: a resolved quiz set drives a full drill round including reset.
#[test]
fn resolved_set_plays_through_a_drill() {
    let content = LessonContent {
        id: 2,
        title: "t".to_string(),
        quizzes: Some(vec![QuizSetSpec {
            title: Some("order the request".to_string()),
            lines: strings(&["A: すみません。", "B: はい、わかりました。"]),
        }]),
        ..Default::default()
    };
    let sets = resolve_quiz_sets(&content);
    assert_eq!(sets.len(), 1);

    let mut rng = SmallRng::seed_from_u64(3);
    let mut drill = OrderingDrill::new(&sets[0].lines, &mut rng);
    assert_eq!(drill.pool.len() + drill.selected.len(), 2);

    drill.pick(0, Source::Pool);
    drill.pick(1, Source::Pool);
    assert!(drill.verify(&mut CountingFeedback::default()));

    drill.reset(&mut rng);
    assert!(drill.selected.is_empty());
    assert_eq!(drill.pool.len(), 2);
}

// Scheduler: an N-line sequence issues exactly N speaks, each gated on the
// previous completion, in the original order. Thread-shared log because
// integration tests may observe the engine from the outside.
#[test]
fn scheduler_plays_sequence_strictly_in_order() {
    struct SharedEngine {
        log: Arc<Mutex<Vec<(String, u64)>>>,
    }
    impl SpeechEngine for SharedEngine {
        fn stop(&mut self) {}
        fn speak(&mut self, request: &SpeechRequest, utterance: UtteranceId) {
            self.log.lock().unwrap().push((request.text.clone(), utterance.0));
        }
    }

    let log = Arc::new(Mutex::new(Vec::new()));
    let mut scheduler = PlaybackScheduler::new(Box::new(SharedEngine {
        log: Arc::clone(&log),
    }));

    let lines = strings(&["一", "二", "三", "四"]);
    scheduler.play_sequence(&lines, "ja-JP", 1.0);
    for expected in 1..=lines.len() {
        assert_eq!(log.lock().unwrap().len(), expected);
        let id = UtteranceId(log.lock().unwrap().last().unwrap().1);
        scheduler.on_done(id);
    }
    assert!(scheduler.is_idle());
    let texts: Vec<String> = log.lock().unwrap().iter().map(|(t, _)| t.clone()).collect();
    assert_eq!(texts, lines);
}
