use serde::Deserialize;

/// One lesson of curriculum content, as shipped in the bundled JSON files.
/// Everything beyond `id` and `title` is optional: lessons are authored
/// incrementally and older ones predate several fields.
///
/// The three quiz representations are explicit optional fields so the
/// resolver can match on presence instead of probing shapes:
/// - `quizzes`: authored quiz sets (preferred),
/// - `quiz_lines`: a single flat line list (legacy lessons),
/// - `dialogues[*].kanji`: auto-derivable material.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LessonContent {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub vocab: Vec<VocabItem>,
    #[serde(default)]
    pub grammar: Option<GrammarSection>,
    #[serde(default)]
    pub dialogues: Vec<DialogueEntry>,
    #[serde(default)]
    pub quizzes: Option<Vec<QuizSetSpec>>,
    #[serde(default)]
    pub quiz_lines: Option<Vec<String>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VocabItem {
    pub jp: String,
    #[serde(default)]
    pub romaji: String,
    #[serde(default)]
    pub meaning: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GrammarSection {
    pub title: String,
    #[serde(default)]
    pub points: Vec<GrammarPoint>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GrammarPoint {
    pub rule: String,
    #[serde(default)]
    pub jp: String,
    #[serde(default)]
    pub romaji: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// A scripted dialogue. `kana`, `kanji` and `translation` are parallel
/// line-for-line; any of them may be shorter or absent in older lessons.
#[derive(Clone, Debug, Deserialize)]
pub struct DialogueEntry {
    pub title: String,
    #[serde(default)]
    pub kana: Vec<String>,
    #[serde(default)]
    pub kanji: Vec<String>,
    #[serde(default)]
    pub translation: Vec<String>,
}

/// An explicitly authored quiz set, before resolution.
#[derive(Clone, Debug, Deserialize)]
pub struct QuizSetSpec {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// A resolved, canonical drill: `lines` holds the single correct order.
/// Guaranteed by the resolver to have at least two lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSet {
    pub title: Option<String>,
    pub lines: Vec<String>,
}
