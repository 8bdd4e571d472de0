use std::fs;
use std::path::{Path, PathBuf};

use rust_embed::Embed;
use thiserror::Error;

use crate::content::schema::LessonContent;

#[derive(Embed)]
#[folder = "assets/lessons/"]
struct LessonAssets;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no lesson with id {0}")]
    NotFound(u32),
    #[error("lesson {id} is not valid JSON: {source}")]
    Parse {
        id: u32,
        #[source]
        source: serde_json::Error,
    },
}

fn lesson_filename(id: u32) -> String {
    format!("{id:02}.json")
}

fn user_lessons_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("kaiwa").join("lessons"))
}

/// Load a lesson by id. A file dropped into the user lessons directory
/// shadows the bundled lesson with the same id.
pub fn get_lesson(id: u32) -> Result<LessonContent, ContentError> {
    read_lesson(user_lessons_dir().as_deref(), id)
}

fn read_lesson(user_dir: Option<&Path>, id: u32) -> Result<LessonContent, ContentError> {
    let filename = lesson_filename(id);

    if let Some(dir) = user_dir {
        if let Ok(content) = fs::read_to_string(dir.join(&filename)) {
            return serde_json::from_str(&content).map_err(|source| ContentError::Parse { id, source });
        }
    }

    let file = LessonAssets::get(&filename).ok_or(ContentError::NotFound(id))?;
    serde_json::from_slice(file.data.as_ref()).map_err(|source| ContentError::Parse { id, source })
}

/// Ids of all bundled lessons, ascending.
pub fn available_lessons() -> Vec<u32> {
    let mut ids: Vec<u32> = LessonAssets::iter()
        .filter_map(|name| name.strip_suffix(".json").and_then(|s| s.parse().ok()))
        .collect();
    ids.sort_unstable();
    ids
}
