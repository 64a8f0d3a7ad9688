//! Job Corpus — the immutable set of postings the engine matches against.
//!
//! Loaded once at startup from a JSON file and never mutated afterwards.
//! A corpus that fails to load is fatal: the service refuses to start rather
//! than silently substituting demo data.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single job posting as shipped in the corpus file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub experience_required: String,
    pub salary: String,
    /// Declared required skills. May be empty; a posting with no declared
    /// skills always scores 0.
    #[serde(default)]
    pub skills: Vec<String>,
    pub url: String,
}

/// Wire shape of the corpus file: `{"jobs": [...]}`.
#[derive(Debug, Deserialize)]
struct CorpusFile {
    jobs: Vec<JobPosting>,
}

/// The loaded-once job corpus. Read-only after construction, so it is shared
/// across requests without locking.
#[derive(Debug)]
pub struct JobCorpus {
    postings: Vec<JobPosting>,
}

impl JobCorpus {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }

    /// Loads the corpus from a `{"jobs": [...]}` JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job corpus file {}", path.display()))?;
        let file: CorpusFile = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse job corpus file {}", path.display()))?;
        Ok(Self::new(file.jobs))
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
