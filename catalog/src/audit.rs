//! Catalog audit: runs the verifier over every stored set.
//!
//! Each set yields one result. Failures are sets that do not verify or do
//! not fit their representation group. Warnings flag records whose name
//! disagrees with the stored data without making the set invalid.

use tracing::{debug, warn};

use crate::model::Status;
use crate::store::{Catalog, Entry};

/// Severity level of an audit result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// Inconsistent metadata (non-blocking).
    Warning,
    /// The set is not a difference set or is malformed (blocking).
    Failure,
}

/// A single audit result.
#[derive(Debug, Clone)]
pub struct AuditResult {
    /// Record name and set index, e.g. `DS(7,3,1,[7]) #0`.
    pub subject: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Optional additional detail lines.
    pub details: Vec<String>,
}

impl AuditResult {
    /// Creates a passing result.
    pub fn pass(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(subject, message, Severity::Pass)
    }

    /// Creates a warning result.
    pub fn warn(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(subject, message, Severity::Warning)
    }

    /// Creates a failure result.
    pub fn fail(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(subject, message, Severity::Failure)
    }

    /// Attaches detail lines.
    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    fn new(subject: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// Returns true if this result represents a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated audit results.
#[derive(Debug, Default)]
pub struct AuditReport {
    /// All results in catalog order.
    pub results: Vec<AuditResult>,
}

impl AuditReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: AuditResult) {
        self.results.push(result);
    }

    /// Number of results with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.results
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    /// Returns the count of failed checks.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true if no check failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Audits every stored set and every record status.
#[must_use]
pub fn audit(catalog: &Catalog) -> AuditReport {
    let mut report = AuditReport::new();

    for (name, record) in catalog.iter() {
        if record.status == Some(Status::No) && !record.sets.is_empty() {
            report.push(AuditResult::warn(
                name.to_string(),
                format!(
                    "status is No but {} set(s) are stored",
                    record.sets.len()
                ),
            ));
        }
    }

    for entry in catalog.entries() {
        audit_entry(&entry, &mut report);
    }

    debug!(
        results = report.results.len(),
        failures = report.failure_count(),
        "catalog audit finished"
    );
    report
}

fn audit_entry(entry: &Entry<'_>, report: &mut AuditReport) {
    let subject = format!("{} #{}", entry.name, entry.index);
    let params = entry.parameters();

    let (group, elements) = match entry.elements() {
        Ok(ok) => ok,
        Err(e) => {
            warn!(%subject, error = %e, "malformed set");
            report.push(AuditResult::fail(subject, e.to_string()));
            return;
        }
    };

    if group.order() != Some(params.v) {
        report.push(AuditResult::warn(
            subject.clone(),
            format!(
                "v = {} but representation group {} has order {}",
                params.v,
                group,
                group
                    .order()
                    .map_or_else(|| "overflowing u64".to_owned(), |o| o.to_string())
            ),
        ));
    }
    if elements.len() as u64 != params.k {
        report.push(AuditResult::warn(
            subject.clone(),
            format!("k = {} but the set has {} element(s)", params.k, elements.len()),
        ));
    }

    let verdict = diffset::verify(&params, &group, &elements);
    match verdict.violation() {
        Some(violation) => {
            warn!(%subject, %violation, "set is not a difference set");
            report.push(
                AuditResult::fail(subject, format!("not a {} difference set", params))
                    .with_details(vec![violation.to_string()]),
            );
        }
        None if !verdict.is_complete_cover() => {
            report.push(AuditResult::warn(
                subject,
                "verifies, but some group elements never occur as a difference",
            ));
        }
        None => {
            report.push(AuditResult::pass(
                subject,
                format!("verified {} difference set", params),
            ));
        }
    }
}
