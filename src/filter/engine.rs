//! # Filter Engine
//!
//! Compiles a validated [`FilterSet`] into per-question predicates and
//! narrows a page of submissions to the ones every predicate accepts.
//!
//! The engine trusts its input: clauses are expected to have passed
//! [`validate`](super::validator::validate) first.

use std::collections::HashMap;

use serde_json::Value;

use crate::submissions::{reconcile, FilteredPage, PageLimit, Submission, SubmissionsPage};

use super::clause::{Comparator, FilterSet, FilterValue};

/// A comparator bound to its target value
#[derive(Debug, Clone, Copy)]
pub struct Predicate<'a> {
    comparator: Comparator,
    target: &'a FilterValue,
}

impl<'a> Predicate<'a> {
    pub fn new(comparator: Comparator, target: &'a FilterValue) -> Self {
        Self { comparator, target }
    }

    pub fn test(&self, value: &Value) -> bool {
        self.comparator.evaluate(value, self.target)
    }
}

/// Predicates grouped by the question id they apply to
#[derive(Debug, Default)]
pub struct CompiledFilters<'a> {
    by_question: HashMap<&'a str, Vec<Predicate<'a>>>,
}

impl<'a> CompiledFilters<'a> {
    /// Group every clause under its question id
    pub fn compile(filters: &'a FilterSet) -> Self {
        let mut by_question: HashMap<&str, Vec<Predicate>> = HashMap::new();
        for clause in filters.iter() {
            by_question
                .entry(clause.id.as_str())
                .or_default()
                .push(Predicate::new(clause.condition, &clause.value));
        }
        Self { by_question }
    }

    /// Number of distinct question ids referenced
    pub fn question_count(&self) -> usize {
        self.by_question.len()
    }

    /// Check a submission against every predicate.
    ///
    /// A submission missing any referenced question never matches.
    pub fn matches(&self, submission: &Submission) -> bool {
        self.by_question.iter().all(|(id, predicates)| {
            let mut answers = submission.answers(id).peekable();
            answers.peek().is_some()
                && answers.all(|answer| predicates.iter().all(|p| p.test(&answer.value)))
        })
    }
}

/// Filter a fetched page and reconcile its counts
pub fn apply(page: SubmissionsPage, filters: &FilterSet, limit: PageLimit) -> FilteredPage {
    let compiled = CompiledFilters::compile(filters);
    let original_len = page.responses.len();

    let responses: Vec<Submission> = page
        .responses
        .into_iter()
        .filter(|submission| compiled.matches(submission))
        .collect();

    let counts = reconcile(page.total_responses, original_len, responses.len(), limit);

    FilteredPage {
        responses,
        total_responses: counts.total_responses,
        page_count: counts.page_count,
    }
}
