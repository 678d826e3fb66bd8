use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::core::GameMode;
use crate::error::GameError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How many entries a leaderboard shows
pub const DEFAULT_TOP_SCORES: usize = 5;

/// Longest display name before it is cut
pub const MAX_DISPLAY_NAME: usize = 8;

/// One finished round
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// The name as shown on the leaderboard: cut to eight characters plus
    /// `..` when longer, then title-cased
    pub fn display_name(&self) -> String {
        let cut = if self.name.chars().count() > MAX_DISPLAY_NAME {
            let mut head: String = self.name.chars().take(MAX_DISPLAY_NAME).collect();
            head.push_str("..");
            head
        } else {
            self.name.clone()
        };
        title_case(&cut)
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.score)
    }
}

impl FromStr for ScoreEntry {
    type Err = GameError;

    /// Parses a `name:score` line
    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let parts: Vec<&str> = line.split(':').collect();

        let [name, score] = parts.as_slice() else {
            return Err(GameError::InvalidScoreEntry(format!("expected name:score, got {:?}", line)));
        };

        let score = score
            .trim()
            .parse::<u32>()
            .map_err(|e| GameError::InvalidScoreEntry(format!("bad score in {:?}: {}", line, e)))?;

        Ok(Self::new(*name, score))
    }
}

fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = c.is_whitespace();
        }
    }

    result
}

/// Flat list of finished rounds, best first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Scoreboard {
    entries: Vec<ScoreEntry>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// File the scores of a mode are kept in
    pub fn file_name(mode: GameMode) -> &'static str {
        match mode {
            GameMode::Ascending => "scores1.txt",
            GameMode::Descending => "scores2.txt",
        }
    }

    /// Builds a board from `name:score` lines, skipping malformed ones
    pub fn parse(text: &str) -> Self {
        let mut board = Self::new();

        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            match line.parse::<ScoreEntry>() {
                Ok(entry) => board.add_score(entry),
                Err(e) => log::warn!("skipping score line: {}", e),
            }
        }

        board
    }

    /// Reads a board from disk; a missing file is an empty board
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e.into()),
        };

        let board = Self::parse(&text);
        log::info!("loaded {} scores from {}", board.len(), path.display());
        Ok(board)
    }

    /// Appends one entry to the file at `path`, creating it if needed
    pub fn append(path: impl AsRef<Path>, entry: &ScoreEntry) -> Result<()> {
        let path = path.as_ref();
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        log::info!("saved score {} to {}", entry, path.display());
        Ok(())
    }

    /// Records an entry in memory and appends it to `path`
    pub fn record(&mut self, path: impl AsRef<Path>, entry: ScoreEntry) -> Result<()> {
        Self::append(path, &entry)?;
        self.add_score(entry);
        Ok(())
    }

    /// Inserts an entry after every entry with an equal or higher score
    pub fn add_score(&mut self, entry: ScoreEntry) {
        let index = self.entries.partition_point(|e| e.score >= entry.score);
        self.entries.insert(index, entry);
    }

    /// The best `n` entries
    pub fn top_scores(&self, n: usize) -> &[ScoreEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// One `name:score` line per entry, best first
    pub fn to_lines(&self) -> String {
        self.entries.iter().map(|e| format!("{}\n", e)).collect()
    }

    /// Numbered leaderboard text for the best [`DEFAULT_TOP_SCORES`] entries;
    /// empty places show `...`
    pub fn leaderboard(&self) -> String {
        let top = self.top_scores(DEFAULT_TOP_SCORES);
        (0..DEFAULT_TOP_SCORES)
            .map(|i| match top.get(i) {
                Some(entry) => format!("{}. {} {}", i + 1, entry.display_name(), entry.score),
                None => format!("{}. ...", i + 1),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
