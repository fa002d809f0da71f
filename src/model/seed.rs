//! Structured results for the startup seed pass.
//!
//! Every seed step reports what happened instead of discarding errors: the
//! aggregate report is logged once at startup so operators can see which
//! default tables were populated, skipped, or broken, while a failure never
//! stops the remaining steps.

use sea_orm::DbErr;

/// Outcome of a single seed step.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// The table was empty and the given number of default rows was inserted.
    Seeded(u64),
    /// The table already had rows; nothing was inserted.
    AlreadyPopulated,
    /// The step failed; the reason is kept for the startup report.
    Failed(String),
}

/// A named seed step together with its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedStep {
    /// Human-readable entity kind, e.g. `"quests"`.
    pub kind: &'static str,
    /// What happened when the step ran.
    pub outcome: SeedOutcome,
}

/// Aggregated outcomes of the startup seed pass, in execution order.
#[derive(Debug, Default)]
pub struct SeedReport {
    steps: Vec<SeedStep>,
}

impl SeedReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result of one seed step.
    ///
    /// A repository error is captured as [`SeedOutcome::Failed`] with its
    /// message; the caller continues with the next step either way.
    ///
    /// # Arguments
    /// - `kind` - Entity kind label for the report
    /// - `result` - Outcome returned by the repository's seed routine
    pub fn record(&mut self, kind: &'static str, result: Result<SeedOutcome, DbErr>) {
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => SeedOutcome::Failed(err.to_string()),
        };
        self.steps.push(SeedStep { kind, outcome });
    }

    /// All recorded steps, in execution order.
    pub fn steps(&self) -> &[SeedStep] {
        &self.steps
    }

    /// Total number of rows inserted across all steps.
    pub fn seeded_total(&self) -> u64 {
        self.steps
            .iter()
            .map(|step| match step.outcome {
                SeedOutcome::Seeded(count) => count,
                _ => 0,
            })
            .sum()
    }

    /// True when at least one step failed.
    pub fn has_failures(&self) -> bool {
        self.steps
            .iter()
            .any(|step| matches!(step.outcome, SeedOutcome::Failed(_)))
    }

    /// Logs the report: one line per step plus a summary.
    pub fn log(&self) {
        for step in &self.steps {
            match &step.outcome {
                SeedOutcome::Seeded(count) => {
                    tracing::info!("Seeded {count} default {}", step.kind);
                }
                SeedOutcome::AlreadyPopulated => {
                    tracing::debug!("Default {} already present", step.kind);
                }
                SeedOutcome::Failed(reason) => {
                    tracing::warn!("Seeding {} failed: {reason}", step.kind);
                }
            }
        }
        if self.has_failures() {
            tracing::warn!(
                "Database initialized with seed failures ({} rows inserted)",
                self.seeded_total()
            );
        } else {
            tracing::info!(
                "Database initialized successfully ({} rows inserted)",
                self.seeded_total()
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests that a repository error is captured as a Failed outcome.
    #[test]
    fn records_error_as_failure() {
        let mut report = SeedReport::new();
        report.record("quests", Err(DbErr::Custom("no such table".to_string())));

        assert!(report.has_failures());
        assert!(matches!(
            &report.steps()[0].outcome,
            SeedOutcome::Failed(reason) if reason.contains("no such table")
        ));
    }

    /// Tests that the seeded total sums only successful inserts.
    #[test]
    fn sums_seeded_rows() {
        let mut report = SeedReport::new();
        report.record("site themes", Ok(SeedOutcome::Seeded(5)));
        report.record("quests", Ok(SeedOutcome::AlreadyPopulated));
        report.record("badges", Ok(SeedOutcome::Seeded(7)));

        assert_eq!(report.seeded_total(), 12);
        assert!(!report.has_failures());
    }
}
