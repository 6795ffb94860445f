use chrono::Local;
use log::info;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::ScoreError;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub date: String,
    pub score: u32,
}

impl ScoreRecord {
    pub fn new(date: impl Into<String>, score: u32) -> Self {
        Self {
            date: date.into(),
            score,
        }
    }

    /// Record stamped with the current local time
    pub fn now(score: u32) -> Self {
        Self::new(Local::now().format(DATE_FORMAT).to_string(), score)
    }
}

/// Every finished game, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    scores: Vec<ScoreRecord>,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record and restore the ordering: score descending, newer date first on ties.
    pub fn insert(&mut self, record: ScoreRecord) {
        self.scores.push(record);
        self.scores
            .sort_by(|a, b| b.score.cmp(&a.score).then_with(|| b.date.cmp(&a.date)));
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Serialize with a four-space indent
    pub fn to_json(&self) -> Result<String, ScoreError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Where score boards come from and go to.
pub trait ScoreStore {
    fn load(&self) -> Result<ScoreBoard, ScoreError>;

    fn save(&self, board: &ScoreBoard) -> Result<(), ScoreError>;
}

/// Score board kept as a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonScoreFile {
    path: PathBuf,
}

impl JsonScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonScoreFile {
    fn load(&self) -> Result<ScoreBoard, ScoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            // First run: nothing saved yet
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ScoreBoard::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, board: &ScoreBoard) -> Result<(), ScoreError> {
        fs::write(&self.path, board.to_json()?)?;
        info!("Saved {} scores to {}", board.len(), self.path.display());
        Ok(())
    }
}

/// In-memory store. Clones share the same board, so a caller can keep a
/// handle and watch what the game saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    board: Rc<RefCell<ScoreBoard>>,
    saves: Rc<Cell<usize>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(board: ScoreBoard) -> Self {
        Self {
            board: Rc::new(RefCell::new(board)),
            saves: Rc::new(Cell::new(0)),
        }
    }

    pub fn board(&self) -> ScoreBoard {
        self.board.borrow().clone()
    }

    /// How many times the board has been saved
    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<ScoreBoard, ScoreError> {
        Ok(self.board.borrow().clone())
    }

    fn save(&self, board: &ScoreBoard) -> Result<(), ScoreError> {
        *self.board.borrow_mut() = board.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
