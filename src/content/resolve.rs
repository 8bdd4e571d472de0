use crate::content::schema::{LessonContent, QuizSet};

/// Hard cap on drills shown per lesson.
pub const MAX_QUIZ_SETS: usize = 6;

/// Default title for the legacy single quiz-line list.
const LEGACY_TITLE: &str = "Put the dialogue in order";

/// Resolve a lesson's quiz material into at most [`MAX_QUIZ_SETS`] drills.
///
/// Sources are consulted in fixed priority order:
/// 1. explicitly authored `quizzes`, in arrival order;
/// 2. the legacy flat `quiz_lines` field, as one synthesized set;
/// 3. dialogues with at least two kanji lines, in order, to fill up to the cap.
///
/// Entries that cannot make an ordering puzzle (fewer than two lines) are
/// skipped. A lesson with no usable source resolves to an empty list, which
/// is a normal outcome, not an error.
pub fn resolve_quiz_sets(content: &LessonContent) -> Vec<QuizSet> {
    let mut sets: Vec<QuizSet> = Vec::new();

    if let Some(quizzes) = &content.quizzes {
        for quiz in quizzes {
            if quiz.lines.len() >= 2 {
                sets.push(QuizSet {
                    title: quiz.title.clone(),
                    lines: quiz.lines.clone(),
                });
            }
            if sets.len() >= MAX_QUIZ_SETS {
                break;
            }
        }
    }

    if sets.len() < MAX_QUIZ_SETS {
        if let Some(lines) = &content.quiz_lines {
            if lines.len() >= 2 {
                sets.push(QuizSet {
                    title: Some(LEGACY_TITLE.to_string()),
                    lines: lines.clone(),
                });
            }
        }
    }

    if sets.len() < MAX_QUIZ_SETS {
        for dialogue in &content.dialogues {
            if dialogue.kanji.len() >= 2 {
                sets.push(QuizSet {
                    title: Some(dialogue.title.clone()),
                    lines: dialogue.kanji.clone(),
                });
            }
            if sets.len() >= MAX_QUIZ_SETS {
                break;
            }
        }
    }

    sets.truncate(MAX_QUIZ_SETS);
    sets
}
