use std::collections::HashSet;

use chrono::NaiveDate;
use model::{AccountKind, AccountStatus, BaseAccount, OccurrenceStatus, RecurrencePeriod};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{expand, expand_detailed, ExpansionOptions};
use crate::date_step::days_in_month;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2060, 1u32..=12, 1u32..=31).prop_map(|(year, month, day)| {
        NaiveDate::from_ymd_opt(year, month, day.min(days_in_month(year, month))).unwrap()
    })
}

fn period_strategy() -> impl Strategy<Value = RecurrencePeriod> {
    prop_oneof![
        Just(RecurrencePeriod::Monthly),
        Just(RecurrencePeriod::Quarterly),
        Just(RecurrencePeriod::Yearly),
        "[a-z]{1,12}".prop_map(|raw| RecurrencePeriod::from(format!("x-{raw}"))),
    ]
}

fn status_strategy() -> impl Strategy<Value = AccountStatus> {
    prop_oneof![
        Just(AccountStatus::Pending),
        Just(AccountStatus::Overdue),
        Just(AccountStatus::Paid),
        Just(AccountStatus::Received),
    ]
}

prop_compose! {
    fn account_strategy()(
        due_date in date_strategy(),
        cents in 0i64..10_000_000,
        is_recurring in any::<bool>(),
        period in proptest::option::of(period_strategy()),
        status in status_strategy(),
        receivable in any::<bool>(),
    ) -> BaseAccount {
        let kind = if receivable { AccountKind::Receivable } else { AccountKind::Payable };
        let mut account = BaseAccount::new("acc-1", kind, "generated", Decimal::new(cents, 2), due_date)
            .with_status(status);
        account.is_recurring = is_recurring;
        account.recurring_period = period;
        account
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A non-recurring account expands to itself alone.
    #[test]
    fn prop_non_recurring_yields_anchor_only(
        mut account in account_strategy(),
        today in date_strategy(),
        horizon in 0u32..48,
        cap in 0usize..40,
    ) {
        account.is_recurring = false;
        let result = expand(&account, today, horizon, cap);

        prop_assert_eq!(result.len(), 1);
        prop_assert_eq!(result[0].account(), &account);
        prop_assert_eq!(result[0].occurrence_due_date(), account.due_date);
        prop_assert_eq!(result[0].original_id(), None);
    }

    /// Due dates strictly increase along the sequence.
    #[test]
    fn prop_due_dates_strictly_increase(
        account in account_strategy(),
        today in date_strategy(),
        horizon in 0u32..48,
        cap in 0usize..40,
    ) {
        let result = expand(&account, today, horizon, cap);

        for pair in result.windows(2) {
            prop_assert!(pair[0].occurrence_due_date() < pair[1].occurrence_due_date());
        }
    }

    /// The anchor plus at most `cap` projections, whatever the input.
    #[test]
    fn prop_count_is_bounded_by_cap(
        account in account_strategy(),
        today in date_strategy(),
        horizon in 0u32..2000,
        cap in 0usize..40,
    ) {
        let result = expand(&account, today, horizon, cap);

        prop_assert!(result.len() <= cap + 1);
    }

    /// Past dates are overdue, the rest open, except a settled anchor.
    #[test]
    fn prop_status_follows_due_date(
        account in account_strategy(),
        today in date_strategy(),
        horizon in 0u32..48,
        cap in 0usize..40,
    ) {
        let result = expand(&account, today, horizon, cap);

        for occurrence in &result {
            let expected = if !occurrence.is_projection() && account.status == AccountStatus::Paid {
                OccurrenceStatus::Paid
            } else if !occurrence.is_projection() && account.status == AccountStatus::Received {
                OccurrenceStatus::Received
            } else if occurrence.occurrence_due_date() < today {
                OccurrenceStatus::Overdue
            } else {
                OccurrenceStatus::Open
            };
            prop_assert_eq!(occurrence.status(), expected);
        }
    }

    /// Same arguments, same output.
    #[test]
    fn prop_expansion_is_deterministic(
        account in account_strategy(),
        today in date_strategy(),
        horizon in 0u32..48,
        cap in 0usize..40,
    ) {
        let options = ExpansionOptions { horizon_months: horizon, max_occurrences: cap };

        prop_assert_eq!(
            expand_detailed(&account, today, options),
            expand_detailed(&account, today, options)
        );
    }

    /// Widening the horizon only appends occurrences.
    #[test]
    fn prop_wider_horizon_only_adds(
        account in account_strategy(),
        today in date_strategy(),
        horizon in 0u32..48,
        extra in 0u32..48,
        cap in 0usize..40,
    ) {
        let narrow = expand(&account, today, horizon, cap);
        let wide = expand(&account, today, horizon + extra, cap);

        prop_assert!(wide.len() >= narrow.len());
        prop_assert_eq!(&wide[..narrow.len()], &narrow[..]);
    }

    /// Occurrence ids are unique and projections point back to the stored row.
    #[test]
    fn prop_identifiers_are_unique(
        account in account_strategy(),
        today in date_strategy(),
        horizon in 0u32..48,
        cap in 0usize..40,
    ) {
        let result = expand(&account, today, horizon, cap);
        let ids: HashSet<&str> = result.iter().map(|o| o.occurrence_id()).collect();

        prop_assert_eq!(ids.len(), result.len());
        prop_assert!(!result[0].is_projection());
        for occurrence in &result[1..] {
            prop_assert_eq!(occurrence.original_id(), Some(account.id.as_str()));
        }
    }

    /// Unknown cadences never produce projections.
    #[test]
    fn prop_unrecognized_period_yields_anchor_only(
        mut account in account_strategy(),
        raw in "[a-z]{1,12}",
        today in date_strategy(),
    ) {
        account.is_recurring = true;
        account.recurring_period = Some(RecurrencePeriod::from(format!("x-{raw}")));

        let expansion = expand_detailed(&account, today, ExpansionOptions::default());

        prop_assert_eq!(expansion.occurrences.len(), 1);
        prop_assert!(expansion.warning.is_some());
    }
}
