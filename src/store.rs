use crate::logger;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const STORE_FILE: &str = "questions.json";

/// On-disk shape of the persisted slot: `{"questions": ["...", ...]}`.
#[derive(Debug, Serialize, Deserialize)]
struct SavedQuestions {
    questions: Vec<String>,
}

/// Where the question list lives between runs. Injected so the key handlers
/// can be tested against `MemoryStore`.
pub trait QuestionStore {
    /// Read the persisted list. Absent, unreadable or malformed data all
    /// degrade to an empty list; this never fails.
    fn load(&self) -> Vec<String>;
    /// Persist the full list. Failures are swallowed (logged, not raised).
    fn save(&mut self, questions: &[String]);
}

fn get_data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share\\question-cards")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/question-cards")
    }
}

/// Single JSON slot under the platform data directory.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new() -> Self {
        Self {
            path: get_data_dir().join(STORE_FILE),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionStore for FileStore {
    fn load(&self) -> Vec<String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str::<SavedQuestions>(&raw) {
            Ok(saved) => saved.questions,
            Err(e) => {
                logger::log(&format!("discarding malformed question store: {}", e));
                Vec::new()
            }
        }
    }

    fn save(&mut self, questions: &[String]) {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).ok();
        }
        let saved = SavedQuestions {
            questions: questions.to_vec(),
        };
        match serde_json::to_string(&saved) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    logger::log(&format!("failed to save question store: {}", e));
                }
            }
            Err(e) => logger::log(&format!("failed to serialize question store: {}", e)),
        }
    }
}

/// In-memory stand-in for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub questions: Vec<String>,
}

impl QuestionStore for MemoryStore {
    fn load(&self) -> Vec<String> {
        self.questions.clone()
    }

    fn save(&mut self, questions: &[String]) {
        self.questions = questions.to_vec();
    }
}

/// Split raw input on line breaks or commas, trim whitespace, drop empty
/// entries. Order is preserved.
pub fn parse_questions(text: &str) -> Vec<String> {
    text.split(['\n', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
