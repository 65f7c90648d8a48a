use chrono::{Days, NaiveDate};
use model::{AccountKind, BaseAccount, OccurrenceStatus, ProjectedOccurrence};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use crate::error::{ComputeError, ExpansionWarning, Result};
use crate::recurrence::RecurrenceExpander;

/// Inclusive calendar range used by calendar and dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ComputeError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Amounts of one account kind, split by occurrence status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KindTotals {
    pub open: Decimal,
    pub overdue: Decimal,
    /// Paid payables or received receivables.
    pub settled: Decimal,
    pub overdue_count: usize,
}

impl KindTotals {
    /// Money still expected to move: open plus overdue.
    pub fn outstanding(&self) -> Decimal {
        self.open + self.overdue
    }

    fn add(&mut self, occurrence: &ProjectedOccurrence) {
        match occurrence.status() {
            OccurrenceStatus::Open => self.open += occurrence.amount(),
            OccurrenceStatus::Overdue => {
                self.overdue += occurrence.amount();
                self.overdue_count += 1;
            }
            OccurrenceStatus::Paid | OccurrenceStatus::Received => {
                self.settled += occurrence.amount()
            }
        }
    }
}

/// Dashboard figures over a projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionSummary {
    pub payable: KindTotals,
    pub receivable: KindTotals,
    /// Stored rows only; projections are not counted.
    pub stored_count: usize,
    pub projected_count: usize,
    /// Open occurrences due within the notice window, for badge counts.
    pub due_soon_count: usize,
    /// Receivable outstanding minus payable outstanding.
    pub net_outstanding: Decimal,
}

/// Occurrences of many accounts merged into one list sorted by due date.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    occurrences: Vec<ProjectedOccurrence>,
    warnings: Vec<ExpansionWarning>,
}

impl Projection {
    /// Expands every account with `expander` and merges the results.
    ///
    /// Ties on the due date are broken by occurrence id so the order does not
    /// depend on the order the accounts were fetched in.
    #[instrument(skip(accounts, expander), fields(num_accounts = accounts.len(), today = %expander.today()))]
    pub fn build(accounts: &[BaseAccount], expander: &RecurrenceExpander) -> Self {
        let mut occurrences = Vec::new();
        let mut warnings = Vec::new();

        for account in accounts {
            let expansion = expander.expand_detailed(account);
            occurrences.extend(expansion.occurrences);
            warnings.extend(expansion.warning);
        }

        occurrences.sort_by(|a, b| {
            a.occurrence_due_date()
                .cmp(&b.occurrence_due_date())
                .then_with(|| a.occurrence_id().cmp(b.occurrence_id()))
        });

        info!(
            "Projected {} occurrences from {} accounts ({} warnings)",
            occurrences.len(),
            accounts.len(),
            warnings.len()
        );

        Self {
            occurrences,
            warnings,
        }
    }

    pub fn occurrences(&self) -> &[ProjectedOccurrence] {
        &self.occurrences
    }

    pub fn warnings(&self) -> &[ExpansionWarning] {
        &self.warnings
    }

    /// Keeps the occurrences due inside `range`. Warnings are kept as they are.
    pub fn within(&self, range: DateRange) -> Projection {
        let occurrences: Vec<_> = self
            .occurrences
            .iter()
            .filter(|o| range.contains(o.occurrence_due_date()))
            .cloned()
            .collect();

        debug!(
            "Kept {} of {} occurrences between {} and {}",
            occurrences.len(),
            self.occurrences.len(),
            range.start(),
            range.end()
        );

        Projection {
            occurrences,
            warnings: self.warnings.clone(),
        }
    }

    /// Number of stored rows in the projection.
    pub fn stored_count(&self) -> usize {
        self.occurrences.iter().filter(|o| !o.is_projection()).count()
    }

    pub fn projected_count(&self) -> usize {
        self.occurrences.iter().filter(|o| o.is_projection()).count()
    }

    /// Open occurrences due between `today` and `today + notice_days`, both included.
    pub fn due_soon(&self, today: NaiveDate, notice_days: u32) -> Vec<&ProjectedOccurrence> {
        let until = today
            .checked_add_days(Days::new(u64::from(notice_days)))
            .unwrap_or(NaiveDate::MAX);

        self.occurrences
            .iter()
            .filter(|o| o.status() == OccurrenceStatus::Open)
            .filter(|o| today <= o.occurrence_due_date() && o.occurrence_due_date() <= until)
            .collect()
    }

    pub fn summary(&self, today: NaiveDate, notice_days: u32) -> ProjectionSummary {
        let mut payable = KindTotals::default();
        let mut receivable = KindTotals::default();

        for occurrence in &self.occurrences {
            match occurrence.kind() {
                AccountKind::Payable => payable.add(occurrence),
                AccountKind::Receivable => receivable.add(occurrence),
            }
        }

        ProjectionSummary {
            net_outstanding: receivable.outstanding() - payable.outstanding(),
            payable,
            receivable,
            stored_count: self.stored_count(),
            projected_count: self.projected_count(),
            due_soon_count: self.due_soon(today, notice_days).len(),
        }
    }
}
