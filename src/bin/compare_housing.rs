//! Compare the three housing modes side by side for one household
//!
//! Usage: cargo run --bin compare_housing

use anyhow::Context;
use chrono::{Local, NaiveDate};
use family_finance::household::{
    BuyerCategory, ChildStatus, HousingPlan, PlannedPurchase, ProjectionParameters,
};
use family_finance::projection::{ProjectionConfig, ProjectionResult};
use family_finance::scenario::ScenarioRunner;
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Local::now().date_naive();
    let params = base_params(start);
    params.validate().context("invalid parameters")?;

    let purchase_date = shift_months(start, 12);
    let plans: Vec<(&str, HousingPlan)> = vec![
        ("renting", HousingPlan::NotPlanned),
        (
            "owned",
            HousingPlan::AlreadyOwned {
                monthly_mortgage: 1_500.0,
                property_value: 900_000.0,
                outstanding_loan: 350_000.0,
            },
        ),
        (
            "purchase",
            HousingPlan::PlannedPurchase(PlannedPurchase {
                purchase_date,
                house_price: 1_000_000.0,
                down_payment_pct: 25.0,
                loan_term_years: 25,
                annual_rate_pct: 3.0,
                buyer: BuyerCategory::CitizenFirstHome,
                legal_fees: 3_000.0,
                other_fees: 2_000.0,
            }),
        ),
    ];

    let runner = ScenarioRunner::new(params);
    let config = ProjectionConfig::starting_at(start);

    // Projections are independent; run them in parallel
    let results: Vec<(&str, ProjectionResult)> = plans
        .par_iter()
        .map(|(label, plan)| {
            (
                *label,
                runner.run_with_housing(config.clone(), plan.clone()),
            )
        })
        .collect();

    let output_path = "housing_comparison.csv";
    write_comparison(output_path, &results)?;
    println!("Comparison written to {}", output_path);

    println!("\n{:<10} {:>16} {:>16} {:>16}", "Mode", "FinalSavings", "FinalEquity", "FinalAssets");
    println!("{}", "-".repeat(62));
    for (label, result) in &results {
        let summary = result.summary();
        println!(
            "{:<10} {:>16.2} {:>16.2} {:>16.2}",
            label,
            summary.final_cumulative_savings,
            summary.final_property_equity,
            summary.final_total_assets,
        );
    }

    Ok(())
}

fn base_params(start: NaiveDate) -> ProjectionParameters {
    ProjectionParameters {
        monthly_income: 9_000.0,
        monthly_expenses: 2_500.0,
        monthly_child_expenses: 500.0,
        annual_insurance: 2_000.0,
        annual_tax: 3_000.0,
        annual_bonus: 10_000.0,
        childcare_monthly: 1_000.0,
        preschool_monthly: 1_200.0,
        primary_school_monthly: 300.0,
        child_status: ChildStatus::Expected,
        child_reference_date: shift_months(start, 6),
        initial_funds: 350_000.0,
        housing: HousingPlan::NotPlanned,
    }
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    use chrono::Datelike;
    let total = date.year() * 12 + date.month() as i32 - 1 + months;
    NaiveDate::from_ymd_opt(total.div_euclid(12), (total.rem_euclid(12) + 1) as u32, 1)
        .unwrap_or(date)
}

fn write_comparison(path: &str, results: &[(&str, ProjectionResult)]) -> anyhow::Result<()> {
    let mut file = File::create(path).context("failed to create output file")?;

    write!(file, "Year,Month")?;
    for (label, _) in results {
        write!(file, ",{label}_savings,{label}_equity,{label}_assets")?;
    }
    writeln!(file)?;

    let months = results
        .first()
        .map(|(_, r)| r.records.len())
        .unwrap_or(0);

    for index in 0..months {
        let (year, month) = results
            .first()
            .map(|(_, r)| (r.records[index].year, r.records[index].month))
            .unwrap_or((0, 0));
        write!(file, "{},{}", year, month)?;
        for (_, result) in results {
            let row = &result.records[index];
            write!(
                file,
                ",{:.2},{:.2},{:.2}",
                row.cumulative_savings, row.property_equity, row.total_assets
            )?;
        }
        writeln!(file)?;
    }

    Ok(())
}
