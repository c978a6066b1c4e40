//! Submission wire types
//!
//! Only `questions` is interpreted. Every other field of a submission or
//! component is carried through to the response untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One answered question, calculation or URL parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionComponent {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Text, number or null
    #[serde(default)]
    pub value: Value,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SubmissionComponent {
    pub fn new(id: impl Into<String>, value: Value) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind: None,
            value,
            extra: Map::new(),
        }
    }
}

/// A single response record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub questions: Vec<SubmissionComponent>,

    /// submissionId, calculations, urlParameters, documents, ...
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Submission {
    pub fn new(questions: Vec<SubmissionComponent>) -> Self {
        Self {
            questions,
            rest: Map::new(),
        }
    }

    /// All answers recorded for a question id
    pub fn answers<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a SubmissionComponent> {
        self.questions.iter().filter(move |q| q.id == id)
    }
}

/// One page as returned by the upstream API.
///
/// `total_responses` and `page_count` describe the whole remote collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionsPage {
    pub responses: Vec<Submission>,
    pub total_responses: u64,
    pub page_count: u64,
}

/// A page restricted to matching submissions, with adjusted counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredPage {
    pub responses: Vec<Submission>,
    pub total_responses: u64,
    pub page_count: u64,
}
