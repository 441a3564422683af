//! Sound-alike search and deduplication over lists of names.
//!
//! Builds on the encoder's matching rule: every name is encoded once when
//! it is indexed, and queries are compared against the stored sounds.
//! - `search`: all names that sound like a query, with the code they share
//! - `groups`: names collapsed into sound-alike groups

use serde::{Deserialize, Serialize};
use soundmatch_encoder::{EncoderConfig, MatchKind, Sound};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Empty query text")]
    EmptyQuery,
    #[error("Query has no encodable letters: {0}")]
    Unencodable(String),
}

/// Configuration for the phonetic index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Settings used to encode indexed names and queries
    pub encoder: EncoderConfig,
}

/// A name that sounds like a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameMatch {
    /// The query as given
    pub query: String,
    /// The indexed name
    pub name: String,
    /// Encoding of the indexed name
    pub sound: Sound,
    /// Which pair of codes matched
    pub kind: MatchKind,
    /// The code both sides share
    pub code: String,
}

impl NameMatch {
    /// One-line explanation of why the name matched.
    pub fn explain(&self) -> String {
        format!(
            "'{}' sounds like '{}': {} match on {}",
            self.name,
            self.query,
            self.kind.label(),
            self.code
        )
    }
}

/// Names that sound alike, keyed by the code of the first member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameGroup {
    /// Codes of the first member, `primary` or `primary/alternate`
    pub code: String,
    /// Member names in insertion order
    pub members: Vec<String>,
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    sound: Sound,
}

/// Encoded names in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PhoneticIndex {
    config: MatcherConfig,
    entries: Vec<Entry>,
}

impl PhoneticIndex {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Build an index from a list of names.
    pub fn from_names<I, S>(names: I, config: MatcherConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::new(config);
        for name in names {
            index.insert(name);
        }
        index
    }

    /// Encode and store a name, returning its sound.
    pub fn insert(&mut self, name: impl Into<String>) -> Sound {
        let name = name.into();
        let sound = Sound::with_config(&name, self.config.encoder);
        self.entries.push(Entry {
            name,
            sound: sound.clone(),
        });
        sound
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find every indexed name that sounds like `query`.
    ///
    /// Results keep insertion order. Only non-empty codes count, so names
    /// that encode to nothing are never returned.
    pub fn search(&self, query: &str) -> Result<Vec<NameMatch>, MatchError> {
        if query.trim().is_empty() {
            return Err(MatchError::EmptyQuery);
        }

        let query_sound = Sound::with_config(query, self.config.encoder);
        if is_silent(&query_sound) {
            return Err(MatchError::Unencodable(query.to_string()));
        }

        let hits: Vec<NameMatch> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let kind = shared_code(&query_sound, &entry.sound)?;
                Some(NameMatch {
                    query: query.to_string(),
                    name: entry.name.clone(),
                    sound: entry.sound.clone(),
                    kind,
                    code: kind.code(&query_sound).to_string(),
                })
            })
            .collect();

        tracing::debug!(
            query = %query,
            code = %query_sound,
            indexed = self.entries.len(),
            hits = hits.len(),
            "phonetic search"
        );

        Ok(hits)
    }

    /// Collapse the indexed names into sound-alike groups.
    ///
    /// Each name joins the first group whose first member shares a
    /// non-empty code with it, otherwise it starts a new group. Names that
    /// encode to nothing always stand alone.
    pub fn groups(&self) -> Vec<NameGroup> {
        let mut groups: Vec<(&Sound, NameGroup)> = Vec::new();

        for entry in &self.entries {
            let existing = groups
                .iter_mut()
                .find(|(lead, _)| shared_code(lead, &entry.sound).is_some());

            match existing {
                Some((_, group)) => group.members.push(entry.name.clone()),
                None => groups.push((
                    &entry.sound,
                    NameGroup {
                        code: entry.sound.to_string(),
                        members: vec![entry.name.clone()],
                    },
                )),
            }
        }

        tracing::debug!(
            names = self.entries.len(),
            groups = groups.len(),
            "grouped names"
        );

        groups.into_iter().map(|(_, group)| group).collect()
    }
}

/// The first pair of codes, in match order, that is equal and non-empty.
///
/// Two names whose primaries are both empty still match when their
/// alternates do.
fn shared_code(lhs: &Sound, rhs: &Sound) -> Option<MatchKind> {
    MatchKind::ALL
        .into_iter()
        .find(|kind| kind.holds(lhs, rhs) && !kind.code(lhs).is_empty())
}

/// A sound with no code at all, such as the encoding of "123".
fn is_silent(sound: &Sound) -> bool {
    sound.codes().iter().all(|code| code.is_empty())
}
