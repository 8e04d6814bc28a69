//! Rendered Views
//!
//! The bill statement view and the CSV exports. Numbers are printed from
//! the already-rounded figures the billing engine produced; nothing here
//! recomputes money.

use csv::Writer;

use shared::error::{AppError, AppResult};
use shared::models::{FarmerBill, MilkRecord, PayoutRun};

use super::SheetBuilder;

/// Statement sheets match the 48-column slips the cooperative prints
pub const STATEMENT_WIDTH: usize = 48;

fn csv_failed(err: impl std::fmt::Display) -> AppError {
    AppError::export_failed(format!("CSV export failed: {}", err))
}

/// Render a farmer's bill as a plain-text statement sheet
pub fn bill_statement(bill: &FarmerBill) -> String {
    let mut b = SheetBuilder::new(STATEMENT_WIDTH);

    b.eq_sep()
        .text_center("MILK BILL STATEMENT")
        .eq_sep()
        .pair(
            &format!("Farmer: {}", bill.farmer.code),
            &format!("{} ({})", bill.farmer.name, bill.farmer.category),
        )
        .pair("Period:", &bill.period.to_string())
        .dash_sep();

    b.write_line(&format!(
        "{:<10} {:<8} {:>8} {:>8} {:>10}",
        "Date", "Shift", "Litres", "Rate", "Amount"
    ));
    for record in &bill.records {
        b.write_line(&format!(
            "{:<10} {:<8} {:>8.2} {:>8.2} {:>10.2}",
            record.date.to_string(),
            record.shift.as_str(),
            record.litres,
            record.rate,
            record.amount
        ));
    }
    if bill.records.is_empty() {
        b.text_center("(no deliveries in this period)");
    }

    if !bill.advances.is_empty() {
        b.dash_sep().write_line("Advances");
        for advance in &bill.advances {
            b.write_line(&format!(
                "{:<10} {:<26} {:>10.2}",
                advance.date.to_string(),
                advance.remarks.as_deref().unwrap_or(""),
                advance.amount
            ));
        }
    }

    b.dash_sep()
        .pair("Total Litres", &format!("{:.2}", bill.summary.total_litres))
        .pair(
            "Milk Amount",
            &format!("{:.2}", bill.summary.total_milk_amount),
        )
        .pair(
            "Less: Advances",
            &format!("{:.2}", bill.summary.total_advance),
        )
        .eq_sep()
        .pair("NET PAYABLE", &format!("{:.2}", bill.summary.net_payable))
        .eq_sep();

    if !bill.warnings.is_empty() {
        b.write_line(&format!(
            "Note: {} entr{} skipped (unusable values)",
            bill.warnings.len(),
            if bill.warnings.len() == 1 { "y" } else { "ies" }
        ));
        for warning in &bill.warnings {
            b.write_line(&format!(
                "  #{}: {}",
                warning.id.map_or_else(|| "?".to_string(), |id| id.to_string()),
                warning.field
            ));
        }
    }

    b.finalize()
}

/// Render milk records as a CSV document
pub fn records_csv(records: &[MilkRecord]) -> AppResult<String> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record([
        "Date",
        "Shift",
        "Farmer_Code",
        "Farmer_Name",
        "Category",
        "Litres",
        "Fat",
        "SNF",
        "Rate",
        "Amount",
    ])
    .map_err(csv_failed)?;

    for record in records {
        wtr.write_record([
            &record.date.to_string(),
            record.shift.as_str(),
            &record.farmer_code,
            &record.farmer_name,
            &record.category,
            &format!("{:.2}", record.litres),
            &format!("{:.1}", record.fat),
            &format!("{:.1}", record.snf),
            &format!("{:.2}", record.rate),
            &format!("{:.2}", record.amount),
        ])
        .map_err(csv_failed)?;
    }

    let bytes = wtr.into_inner().map_err(csv_failed)?;
    String::from_utf8(bytes).map_err(csv_failed)
}

/// Render the payout sheet as a CSV document, with a trailing TOTAL row
pub fn payouts_csv(run: &PayoutRun) -> AppResult<String> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record([
        "Farmer_Code",
        "Farmer_Name",
        "Category",
        "Total_Litres",
        "Milk_Amount",
        "Advance_Amount",
        "Net_Payable",
    ])
    .map_err(csv_failed)?;

    for line in &run.lines {
        wtr.write_record([
            &line.farmer_code,
            &line.farmer_name,
            &line.category,
            &format!("{:.2}", line.total_litres),
            &format!("{:.2}", line.milk_amount),
            &format!("{:.2}", line.advance_amount),
            &format!("{:.2}", line.net_payable),
        ])
        .map_err(csv_failed)?;
    }

    wtr.write_record([
        "TOTAL",
        "",
        "",
        &format!("{:.2}", run.totals.total_litres),
        &format!("{:.2}", run.totals.total_milk_amount),
        &format!("{:.2}", run.totals.total_advance),
        &format!("{:.2}", run.totals.net_payable),
    ])
    .map_err(csv_failed)?;

    let bytes = wtr.into_inner().map_err(csv_failed)?;
    String::from_utf8(bytes).map_err(csv_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::{
        AdvanceRecord, BillSummary, BillingPeriod, Farmer, PayoutLine, Shift,
    };

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn record(day: &str, litres: f64, rate: f64, amount: f64) -> MilkRecord {
        MilkRecord {
            id: Some(1),
            date: date(day),
            farmer_code: "F001".to_string(),
            farmer_name: "Ramesh Patil".to_string(),
            category: "Cow".to_string(),
            shift: Shift::Morning,
            litres,
            fat: 4.5,
            snf: 8.0,
            rate,
            amount,
            created_at: None,
        }
    }

    fn sample_bill() -> FarmerBill {
        FarmerBill {
            farmer: Farmer {
                id: Some(1),
                code: "F001".to_string(),
                name: "Ramesh Patil".to_string(),
                category: "Cow".to_string(),
            },
            period: BillingPeriod::new(date("2025-03-01"), date("2025-03-10")).unwrap(),
            records: vec![
                record("2025-03-09", 10.0, 30.0, 300.0),
                record("2025-03-10", 5.0, 30.0, 150.0),
            ],
            advances: vec![AdvanceRecord {
                id: Some(1),
                farmer_code: "F001".to_string(),
                date: date("2025-03-05"),
                amount: 100.0,
                remarks: Some("Seed purchase".to_string()),
                created_at: None,
            }],
            summary: BillSummary {
                total_litres: 15.0,
                total_milk_amount: 450.0,
                total_advance: 100.0,
                net_payable: 350.0,
            },
            warnings: vec![],
        }
    }

    #[test]
    fn test_bill_statement_layout() {
        let text = bill_statement(&sample_bill());
        assert!(text.contains("MILK BILL STATEMENT"));
        assert!(text.contains("Ramesh Patil"));
        assert!(text.contains("2025-03-01 to 2025-03-10"));
        assert!(text.contains("Seed purchase"));
        assert!(text.contains("NET PAYABLE"));
        assert!(text.contains("350.00"));

        // Paired lines pad out to the full sheet width
        let net_line = text
            .lines()
            .find(|l| l.starts_with("NET PAYABLE"))
            .unwrap();
        assert_eq!(net_line.chars().count(), STATEMENT_WIDTH);
    }

    #[test]
    fn test_bill_statement_empty_period() {
        let mut bill = sample_bill();
        bill.records.clear();
        bill.advances.clear();
        bill.summary = BillSummary::default();

        let text = bill_statement(&bill);
        assert!(text.contains("(no deliveries in this period)"));
        assert!(!text.contains("Advances"));
        assert!(text.contains("0.00"));
    }

    #[test]
    fn test_records_csv_header_and_rows() {
        let records = vec![
            record("2025-03-09", 10.0, 30.0, 300.0),
            record("2025-03-10", 5.0, 30.0, 150.0),
        ];
        let csv = records_csv(&records).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Date,Shift,Farmer_Code"));
        assert!(lines[1].contains("F001"));
        assert!(lines[1].contains("300.00"));
    }

    #[test]
    fn test_payouts_csv_ends_with_total_row() {
        let run = PayoutRun {
            period: BillingPeriod::new(date("2025-03-01"), date("2025-03-10")).unwrap(),
            lines: vec![PayoutLine {
                farmer_code: "F001".to_string(),
                farmer_name: "Ramesh Patil".to_string(),
                category: "Cow".to_string(),
                total_litres: 15.0,
                milk_amount: 450.0,
                advance_amount: 100.0,
                net_payable: 350.0,
            }],
            totals: BillSummary {
                total_litres: 15.0,
                total_milk_amount: 450.0,
                total_advance: 100.0,
                net_payable: 350.0,
            },
            warnings: vec![],
        };

        let csv = payouts_csv(&run).unwrap();
        let last = csv.lines().last().unwrap();
        assert!(last.starts_with("TOTAL,,"));
        assert!(last.ends_with("350.00"));
    }
}
