use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::ParsedTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Basic,
    Intermediate,
    Advanced,
}

impl Complexity {
    pub const ALL: &[Complexity] = &[
        Complexity::Basic,
        Complexity::Intermediate,
        Complexity::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Basic => "basic",
            Complexity::Intermediate => "intermediate",
            Complexity::Advanced => "advanced",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Complexity::Basic => "Basic",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Complexity::Basic),
            "intermediate" => Some(Complexity::Intermediate),
            "advanced" => Some(Complexity::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    Single,
    Multi,
}

impl Structure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Structure::Single => "single",
            Structure::Multi => "multi",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Structure::Single),
            "multi" => Some(Structure::Multi),
            _ => None,
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable input to one generation attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub description: String,
    pub tasks: Vec<ParsedTask>,
    pub complexity: Complexity,
    pub structure: Structure,
}

/// An insertion-ordered path -> content map with unique paths. Inserting an
/// existing path replaces its content in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileMap {
    entries: Vec<(String, String)>,
}

impl FileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        let content = content.into();
        match self.entries.iter_mut().find(|(p, _)| *p == path) {
            Some((_, existing)) => *existing = content,
            None => self.entries.push((path, content)),
        }
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, c)| c.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for FileMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = FileMap::new();
        for (path, content) in iter {
            map.insert(path, content);
        }
        map
    }
}

/// The result of one generation attempt: either one document or a set of
/// interrelated files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratedPlaybook {
    Single(String),
    Multi(FileMap),
}

impl GeneratedPlaybook {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            GeneratedPlaybook::Single(content) => Some(content),
            GeneratedPlaybook::Multi(_) => None,
        }
    }

    pub fn as_multi(&self) -> Option<&FileMap> {
        match self {
            GeneratedPlaybook::Single(_) => None,
            GeneratedPlaybook::Multi(files) => Some(files),
        }
    }
}

/// Descriptive metadata handed to the persistence collaborator alongside a
/// finished playbook. The core itself never reads or writes stored records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybookMeta {
    pub name: String,
    pub complexity: Complexity,
    pub structure: Structure,
    pub created_at: DateTime<Utc>,
}

impl PlaybookMeta {
    pub fn new(name: impl Into<String>, complexity: Complexity, structure: Structure) -> Self {
        Self {
            name: name.into(),
            complexity,
            structure,
            created_at: Utc::now(),
        }
    }
}
