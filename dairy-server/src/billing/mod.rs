//! Billing aggregation over the ledger collections
//!
//! Produces per-farmer bill summaries, the payout sheet, the cooperative
//! income summary and the daily collection summary. Every aggregation is a
//! pure traversal of its input slices: no I/O, no locks, no shared state.
//! Sums are carried in `Decimal` and rounded exactly once at the output
//! boundary.
//!
//! A record with an unusable numeric field (NaN after lenient ingestion,
//! or negative) contributes nothing at all; it is skipped whole and
//! reported through a [`RecordWarning`]. One bad record never aborts an
//! aggregation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::money;
use shared::models::{
    AdvanceRecord, BillSummary, BillingPeriod, CooperativeSummary, DailySummary, Farmer,
    MilkRecord, PayoutLine, PayoutRun, RecordWarning, SaleRecord, SaleTotals, Shift,
    WarningSource,
};

/// Result of one aggregation pass
///
/// Sale totals ride along for callers that need them (cooperative reports);
/// they never enter `summary.net_payable`.
#[derive(Debug, Clone, Default)]
pub struct AggregationOutcome {
    pub summary: BillSummary,
    pub sale_totals: SaleTotals,
    pub warnings: Vec<RecordWarning>,
}

/// Litres and un-rounded amount a milk record contributes, or the warning
/// that skips it
fn milk_contribution(record: &MilkRecord) -> Result<(Decimal, Decimal), RecordWarning> {
    for (field, value) in [
        ("litres", record.litres),
        ("rate", record.rate),
        ("amount", record.amount),
    ] {
        if !money::usable(value) {
            return Err(RecordWarning::malformed(
                WarningSource::Milk,
                record.id,
                Some(record.date),
                field,
                format!("{field} is missing or not a usable number"),
            ));
        }
    }
    Ok((
        money::to_decimal(record.litres),
        money::line_amount(record.litres, record.rate),
    ))
}

/// Litres and un-rounded amount a sale contributes, or the warning that
/// skips it
fn sale_contribution(sale: &SaleRecord) -> Result<(Decimal, Decimal), RecordWarning> {
    for (field, value) in [
        ("litres", sale.litres),
        ("rate", sale.rate),
        ("amount", sale.amount),
    ] {
        if !money::usable(value) {
            return Err(RecordWarning::malformed(
                WarningSource::Sale,
                sale.id,
                Some(sale.date),
                field,
                format!("{field} is missing or not a usable number"),
            ));
        }
    }
    Ok((
        money::to_decimal(sale.litres),
        money::line_amount(sale.litres, sale.rate),
    ))
}

/// Amount an advance contributes, or the warning that skips it
fn advance_contribution(advance: &AdvanceRecord) -> Result<Decimal, RecordWarning> {
    if !money::usable(advance.amount) {
        return Err(RecordWarning::malformed(
            WarningSource::Advance,
            advance.id,
            Some(advance.date),
            "amount",
            "amount is missing or not a usable number",
        ));
    }
    Ok(money::to_decimal(advance.amount))
}

/// Aggregate milk, advance and sale entries over an inclusive period,
/// optionally scoped to one farmer code
///
/// Milk amounts are summed as un-rounded litres × rate products; advances
/// are summed as entered. Both totals are rounded to 2 dp here, and
/// `net_payable` is their difference in decimal space, so
/// `net_payable == total_milk_amount - total_advance` holds exactly on the
/// published figures. Sales are never scoped by farmer and never enter the
/// net payable.
pub fn compute_bill_summary(
    records: &[MilkRecord],
    advances: &[AdvanceRecord],
    sales: &[SaleRecord],
    period: BillingPeriod,
    farmer_code: Option<&str>,
) -> AggregationOutcome {
    let mut warnings = Vec::new();

    let mut litres = Decimal::ZERO;
    let mut milk_amount = Decimal::ZERO;
    for record in records {
        if !period.contains(record.date) {
            continue;
        }
        if let Some(code) = farmer_code
            && record.farmer_code != code
        {
            continue;
        }
        match milk_contribution(record) {
            Ok((l, amount)) => {
                litres += l;
                milk_amount += amount;
            }
            Err(warning) => warnings.push(warning),
        }
    }

    let mut advance_total = Decimal::ZERO;
    for advance in advances {
        if !period.contains(advance.date) {
            continue;
        }
        if let Some(code) = farmer_code
            && advance.farmer_code != code
        {
            continue;
        }
        match advance_contribution(advance) {
            Ok(amount) => advance_total += amount,
            Err(warning) => warnings.push(warning),
        }
    }

    let mut sale_litres = Decimal::ZERO;
    let mut sale_amount = Decimal::ZERO;
    for sale in sales {
        if !period.contains(sale.date) {
            continue;
        }
        match sale_contribution(sale) {
            Ok((l, amount)) => {
                sale_litres += l;
                sale_amount += amount;
            }
            Err(warning) => warnings.push(warning),
        }
    }

    let milk_2dp = money::round2(milk_amount);
    let advance_2dp = money::round2(advance_total);

    AggregationOutcome {
        summary: BillSummary {
            total_litres: money::to_f64(litres),
            total_milk_amount: money::to_f64(milk_2dp),
            total_advance: money::to_f64(advance_2dp),
            net_payable: money::to_f64(milk_2dp - advance_2dp),
        },
        sale_totals: SaleTotals {
            total_litres: money::to_f64(sale_litres),
            total_amount: money::to_f64(money::round2(sale_amount)),
        },
        warnings,
    }
}

/// Cooperative-wide income summary over a period
///
/// The second, intentionally distinct aggregation: counter-sale revenue is
/// netted in. `net_income = (milk_amount + sale_amount) - total_advance`,
/// computed from the already-published 2-dp figures.
pub fn compute_cooperative_summary(
    records: &[MilkRecord],
    advances: &[AdvanceRecord],
    sales: &[SaleRecord],
    period: BillingPeriod,
) -> CooperativeSummary {
    let outcome = compute_bill_summary(records, advances, sales, period, None);
    cooperative_summary_from(outcome, period)
}

/// Build the cooperative summary out of an unscoped aggregation outcome
pub fn cooperative_summary_from(
    outcome: AggregationOutcome,
    period: BillingPeriod,
) -> CooperativeSummary {
    let milk = money::to_decimal(outcome.summary.total_milk_amount);
    let sale = money::to_decimal(outcome.sale_totals.total_amount);
    let advance = money::to_decimal(outcome.summary.total_advance);

    CooperativeSummary {
        period,
        milk_litres: outcome.summary.total_litres,
        milk_amount: outcome.summary.total_milk_amount,
        sale_litres: outcome.sale_totals.total_litres,
        sale_amount: outcome.sale_totals.total_amount,
        total_advance: outcome.summary.total_advance,
        net_income: money::to_f64(milk + sale - advance),
        warnings: outcome.warnings,
    }
}

/// Payout sheet for a period: one line per registered farmer, ordered as
/// the farmer slice is ordered, zero-activity farmers included
pub fn payout_run(
    farmers: &[Farmer],
    records: &[MilkRecord],
    advances: &[AdvanceRecord],
    period: BillingPeriod,
) -> PayoutRun {
    let mut lines = Vec::with_capacity(farmers.len());
    let mut warnings = Vec::new();

    let mut litres = Decimal::ZERO;
    let mut milk = Decimal::ZERO;
    let mut advance = Decimal::ZERO;

    for farmer in farmers {
        let outcome = compute_bill_summary(records, advances, &[], period, Some(&farmer.code));

        litres += money::to_decimal(outcome.summary.total_litres);
        milk += money::to_decimal(outcome.summary.total_milk_amount);
        advance += money::to_decimal(outcome.summary.total_advance);
        warnings.extend(outcome.warnings);

        lines.push(PayoutLine {
            farmer_code: farmer.code.clone(),
            farmer_name: farmer.name.clone(),
            category: farmer.category.clone(),
            total_litres: outcome.summary.total_litres,
            milk_amount: outcome.summary.total_milk_amount,
            advance_amount: outcome.summary.total_advance,
            net_payable: outcome.summary.net_payable,
        });
    }

    PayoutRun {
        period,
        lines,
        totals: BillSummary {
            total_litres: money::to_f64(litres),
            total_milk_amount: money::to_f64(milk),
            total_advance: money::to_f64(advance),
            net_payable: money::to_f64(milk - advance),
        },
        warnings,
    }
}

/// Collection totals for one date, optionally narrowed to a shift
///
/// Dashboard numbers. `record_count` and `farmer_count` cover every stored
/// row for the day; litres and amount follow the malformed-record skip
/// policy, with the skips returned for the caller to log.
pub fn daily_summary(
    records: &[MilkRecord],
    date: NaiveDate,
    shift: Option<Shift>,
) -> (DailySummary, Vec<RecordWarning>) {
    let mut litres = Decimal::ZERO;
    let mut amount = Decimal::ZERO;
    let mut warnings = Vec::new();
    let mut codes: HashSet<&str> = HashSet::new();
    let mut record_count = 0u32;

    for record in records {
        if record.date != date {
            continue;
        }
        if let Some(s) = shift
            && record.shift != s
        {
            continue;
        }
        record_count += 1;
        codes.insert(record.farmer_code.as_str());
        match milk_contribution(record) {
            Ok((l, a)) => {
                litres += l;
                amount += a;
            }
            Err(warning) => warnings.push(warning),
        }
    }

    (
        DailySummary {
            date,
            shift,
            farmer_count: codes.len() as u32,
            record_count,
            total_litres: money::to_f64(litres),
            total_amount: money::to_f64(money::round2(amount)),
        },
        warnings,
    )
}
