use chrono::NaiveDate;
use common::{
    AccountKindDto, AccountStatusDto, BaseAccountDto, KindTotalsDto, OccurrenceStatusDto,
    ProjectedOccurrenceDto, ProjectionDto, ProjectionSummaryDto,
};
use compute::{KindTotals, Projection, ProjectionSummary};
use model::{
    AccountKind, AccountStatus, BaseAccount, OccurrenceStatus, ProjectedOccurrence,
    RecurrencePeriod,
};

/// Helper function to convert an incoming account into the domain model.
///
/// Rejects empty ids and negative amounts; everything else, including an
/// unknown recurring period, is accepted and handled during expansion.
pub fn account_from_dto(dto: BaseAccountDto) -> Result<BaseAccount, String> {
    if dto.id.trim().is_empty() {
        return Err("Account id must not be empty".to_string());
    }
    if dto.amount.is_sign_negative() {
        return Err(format!(
            "Account {} has a negative amount {}",
            dto.id, dto.amount
        ));
    }

    Ok(BaseAccount {
        id: dto.id,
        kind: match dto.kind {
            AccountKindDto::Payable => AccountKind::Payable,
            AccountKindDto::Receivable => AccountKind::Receivable,
        },
        description: dto.description,
        counterparty: dto.counterparty,
        category: dto.category,
        amount: dto.amount,
        due_date: dto.due_date,
        status: match dto.status {
            AccountStatusDto::Pending => AccountStatus::Pending,
            AccountStatusDto::Overdue => AccountStatus::Overdue,
            AccountStatusDto::Paid => AccountStatus::Paid,
            AccountStatusDto::Received => AccountStatus::Received,
        },
        is_recurring: dto.is_recurring,
        recurring_period: dto.recurring_period.map(RecurrencePeriod::from),
    })
}

/// Converts a batch, stopping at the first invalid account.
pub fn accounts_from_dtos(dtos: Vec<BaseAccountDto>) -> Result<Vec<BaseAccount>, String> {
    dtos.into_iter().map(account_from_dto).collect()
}

pub fn account_to_dto(account: &BaseAccount) -> BaseAccountDto {
    BaseAccountDto {
        id: account.id.clone(),
        kind: match account.kind {
            AccountKind::Payable => AccountKindDto::Payable,
            AccountKind::Receivable => AccountKindDto::Receivable,
        },
        description: account.description.clone(),
        counterparty: account.counterparty.clone(),
        category: account.category.clone(),
        amount: account.amount,
        due_date: account.due_date,
        status: match account.status {
            AccountStatus::Pending => AccountStatusDto::Pending,
            AccountStatus::Overdue => AccountStatusDto::Overdue,
            AccountStatus::Paid => AccountStatusDto::Paid,
            AccountStatus::Received => AccountStatusDto::Received,
        },
        is_recurring: account.is_recurring,
        recurring_period: account.recurring_period.as_ref().map(|p| p.to_string()),
    }
}

pub fn occurrence_to_dto(occurrence: &ProjectedOccurrence) -> ProjectedOccurrenceDto {
    ProjectedOccurrenceDto {
        occurrence_id: occurrence.occurrence_id().to_string(),
        original_id: occurrence.original_id().map(str::to_string),
        occurrence_due_date: occurrence.occurrence_due_date(),
        status: match occurrence.status() {
            OccurrenceStatus::Open => OccurrenceStatusDto::Open,
            OccurrenceStatus::Overdue => OccurrenceStatusDto::Overdue,
            OccurrenceStatus::Paid => OccurrenceStatusDto::Paid,
            OccurrenceStatus::Received => OccurrenceStatusDto::Received,
        },
        account: account_to_dto(occurrence.account()),
    }
}

fn warnings_to_strings(projection: &Projection) -> Vec<String> {
    projection.warnings().iter().map(|w| w.to_string()).collect()
}

pub fn projection_to_dto(projection: &Projection, today: NaiveDate) -> ProjectionDto {
    ProjectionDto {
        today,
        occurrences: projection.occurrences().iter().map(occurrence_to_dto).collect(),
        stored_count: projection.stored_count(),
        projected_count: projection.projected_count(),
        warnings: warnings_to_strings(projection),
    }
}

fn totals_to_dto(totals: &KindTotals) -> KindTotalsDto {
    KindTotalsDto {
        open: totals.open,
        overdue: totals.overdue,
        settled: totals.settled,
        outstanding: totals.outstanding(),
        overdue_count: totals.overdue_count,
    }
}

pub fn summary_to_dto(
    summary: &ProjectionSummary,
    projection: &Projection,
    today: NaiveDate,
) -> ProjectionSummaryDto {
    ProjectionSummaryDto {
        today,
        payable: totals_to_dto(&summary.payable),
        receivable: totals_to_dto(&summary.receivable),
        stored_count: summary.stored_count,
        projected_count: summary.projected_count,
        due_soon_count: summary.due_soon_count,
        net_outstanding: summary.net_outstanding,
        warnings: warnings_to_strings(projection),
    }
}
