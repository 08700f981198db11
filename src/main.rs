//! Family Finance CLI
//!
//! Collects household parameters, runs one 72-month projection, prints a
//! monthly table and summary, and writes the full series to CSV.

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use family_finance::household::{
    self, BuyerCategory, ChildStatus, HousingPlan, PlannedPurchase, ProjectionParameters,
};
use family_finance::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use std::fs::File;
use std::io::Write;

/// Household financial projection over a 72-month horizon
#[derive(Debug, Parser)]
#[command(name = "family_finance", version, about)]
struct Args {
    /// Monthly household income
    #[arg(long, default_value_t = 5000.0)]
    income: f64,

    /// Monthly base living expenses
    #[arg(long, default_value_t = 2000.0)]
    expenses: f64,

    /// Monthly recurring child expense (from the reference month)
    #[arg(long, default_value_t = 500.0)]
    child_expenses: f64,

    /// Annual insurance premium
    #[arg(long, default_value_t = 2000.0)]
    insurance: f64,

    /// Annual tax bill
    #[arg(long, default_value_t = 3000.0)]
    tax: f64,

    /// Annual bonus, paid in December
    #[arg(long, default_value_t = 10000.0)]
    bonus: f64,

    /// Monthly childcare fee (ages 6-47 months)
    #[arg(long, default_value_t = 1000.0)]
    childcare: f64,

    /// Monthly preschool fee (ages 48-83 months)
    #[arg(long, default_value_t = 1200.0)]
    preschool: f64,

    /// Monthly primary school fee (age 84 months and up)
    #[arg(long, default_value_t = 300.0)]
    primary_school: f64,

    /// Child status: born, expected or planned
    #[arg(long, value_parser = parse_child_status, default_value = "born")]
    child_status: ChildStatus,

    /// Child birth/due/intended date (YYYY-MM-DD)
    #[arg(long)]
    child_date: NaiveDate,

    /// Savings on hand at projection start
    #[arg(long, default_value_t = 0.0)]
    initial_funds: f64,

    /// Monthly mortgage for an already-owned home
    #[arg(long)]
    mortgage: Option<f64>,

    /// Current property value (with --mortgage)
    #[arg(long, default_value_t = 0.0)]
    property_value: f64,

    /// Outstanding loan balance (with --mortgage)
    #[arg(long, default_value_t = 0.0)]
    outstanding_loan: f64,

    /// Planned purchase date (YYYY-MM-DD); enables purchase mode
    #[arg(long, conflicts_with = "mortgage")]
    purchase_date: Option<NaiveDate>,

    /// House price for a planned purchase
    #[arg(long, default_value_t = 1_000_000.0)]
    house_price: f64,

    /// Down payment percent of price [5, 50]
    #[arg(long, default_value_t = 25.0)]
    down_payment_pct: f64,

    /// Loan term in years [5, 30]
    #[arg(long, default_value_t = 25)]
    loan_term_years: u32,

    /// Annual interest rate percent [1.0, 5.0]
    #[arg(long, default_value_t = 3.0)]
    interest_rate: f64,

    /// Buyer category for stamp duty
    #[arg(long, value_parser = parse_buyer, default_value = "citizen-first-home")]
    buyer: BuyerCategory,

    /// Legal fees at purchase
    #[arg(long, default_value_t = 3000.0)]
    legal_fees: f64,

    /// Other purchase fees
    #[arg(long, default_value_t = 2000.0)]
    other_fees: f64,

    /// CSV file of one-time expenses (name,amount,date,category)
    #[arg(long)]
    one_time_file: Option<std::path::PathBuf>,

    /// Number of months to project
    #[arg(long, default_value_t = 72)]
    months: u32,

    /// Output CSV path for the full monthly series
    #[arg(long, default_value = "projection_output.csv")]
    output: String,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn parse_child_status(s: &str) -> Result<ChildStatus, String> {
    match s {
        "born" => Ok(ChildStatus::Born),
        "expected" => Ok(ChildStatus::Expected),
        "planned" => Ok(ChildStatus::Planned),
        other => Err(format!("unknown child status: {other}")),
    }
}

fn parse_buyer(s: &str) -> Result<BuyerCategory, String> {
    match s {
        "citizen-first-home" => Ok(BuyerCategory::CitizenFirstHome),
        "citizen-additional-home" => Ok(BuyerCategory::CitizenAdditionalHome),
        "PR-first-home" => Ok(BuyerCategory::PrFirstHome),
        "PR-additional-home" => Ok(BuyerCategory::PrAdditionalHome),
        "foreigner" => Ok(BuyerCategory::Foreigner),
        other => Err(format!("unknown buyer category: {other}")),
    }
}

impl Args {
    fn housing_plan(&self) -> HousingPlan {
        if let Some(purchase_date) = self.purchase_date {
            HousingPlan::PlannedPurchase(PlannedPurchase {
                purchase_date,
                house_price: self.house_price,
                down_payment_pct: self.down_payment_pct,
                loan_term_years: self.loan_term_years,
                annual_rate_pct: self.interest_rate,
                buyer: self.buyer,
                legal_fees: self.legal_fees,
                other_fees: self.other_fees,
            })
        } else if let Some(monthly_mortgage) = self.mortgage {
            HousingPlan::AlreadyOwned {
                monthly_mortgage,
                property_value: self.property_value,
                outstanding_loan: self.outstanding_loan,
            }
        } else {
            HousingPlan::NotPlanned
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = ProjectionParameters {
        monthly_income: args.income,
        monthly_expenses: args.expenses,
        monthly_child_expenses: args.child_expenses,
        annual_insurance: args.insurance,
        annual_tax: args.tax,
        annual_bonus: args.bonus,
        childcare_monthly: args.childcare,
        preschool_monthly: args.preschool,
        primary_school_monthly: args.primary_school,
        child_status: args.child_status,
        child_reference_date: args.child_date,
        initial_funds: args.initial_funds,
        housing: args.housing_plan(),
    };
    params.validate().context("invalid parameters")?;

    let one_time = match &args.one_time_file {
        Some(path) => household::load_expenses(path)
            .with_context(|| format!("loading one-time expenses from {}", path.display()))?,
        None => Vec::new(),
    };
    household::validate_expenses(&one_time).context("invalid one-time expenses")?;

    let mut config = ProjectionConfig::starting_at(Local::now().date_naive());
    config.projection_months = args.months;
    let engine = ProjectionEngine::new(config);
    let result = engine.project(&params, &one_time);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.summary())?);
        return Ok(());
    }

    print_table(&result);
    write_csv(&args.output, &result)
        .with_context(|| format!("writing projection to {}", args.output))?;
    println!("\nFull results written to: {}", args.output);
    print_summary(&result);

    Ok(())
}

fn print_table(result: &ProjectionResult) {
    println!("Projection Results ({} months):", result.records.len());
    println!(
        "{:>4} {:>4} {:>9} {:>9} {:>9} {:>10} {:>10} {:>11} {:>12} {:>13}",
        "Year", "Mon", "Income", "Bonus", "Mortgage", "Education", "OneTime", "Savings", "CumSavings", "TotalAssets"
    );
    println!("{}", "-".repeat(102));

    // Print first 24 months to console
    for row in result.records.iter().take(24) {
        println!(
            "{:>4} {:>4} {:>9.2} {:>9.2} {:>9.2} {:>10.2} {:>10.2} {:>11.2} {:>12.2} {:>13.2}",
            row.year,
            row.month_name,
            row.income,
            row.bonus,
            row.mortgage_payment,
            row.education_fees(),
            row.one_time_expenses + row.purchase_costs,
            row.monthly_savings,
            row.cumulative_savings,
            row.total_assets,
        );
    }
    if result.records.len() > 24 {
        println!("... ({} more months)", result.records.len() - 24);
    }
}

fn write_csv(path: &str, result: &ProjectionResult) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "Year,Month,ChildAgeMonths,Income,Bonus,Mortgage,BaseExpenses,ChildExpenses,\
         Childcare,Preschool,PrimarySchool,Insurance,Tax,OneTime,PurchaseCosts,\
         PropertyValue,OutstandingLoan,PropertyEquity,TotalExpenses,MonthlySavings,\
         CumulativeSavings,TotalAssets"
    )?;

    // Two-decimal rounding happens here at the presentation boundary only
    for row in &result.records {
        writeln!(
            file,
            "{},{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.year,
            row.month,
            row.child_age_months,
            row.income,
            row.bonus,
            row.mortgage_payment,
            row.base_expenses,
            row.child_expenses,
            row.childcare_fee,
            row.preschool_fee,
            row.primary_school_fee,
            row.insurance_share,
            row.tax_share,
            row.one_time_expenses,
            row.purchase_costs,
            row.property_value,
            row.outstanding_loan,
            row.property_equity,
            row.total_expenses,
            row.monthly_savings,
            row.cumulative_savings,
            row.total_assets,
        )?;
    }

    Ok(())
}

fn print_summary(result: &ProjectionResult) {
    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Months: {}", summary.total_months);
    println!("  Total Income: ${:.2}", summary.total_income);
    println!("  Total Expenses: ${:.2}", summary.total_expenses);
    println!("  Total Education Fees: ${:.2}", summary.total_education);
    println!("  Total One-Time Expenses: ${:.2}", summary.total_one_time);
    if summary.purchase_outlay > 0.0 {
        println!("  Stamp Duty: ${:.2}", summary.total_stamp_duty);
        println!("  Purchase Cash Outlay: ${:.2}", summary.purchase_outlay);
    }
    if !result.dropped_expenses.is_empty() {
        println!(
            "  One-time expenses beyond horizon (dropped): {}",
            result.dropped_expenses.len()
        );
    }
    println!("  Months in Deficit: {}", summary.months_in_deficit);
    println!("  Final Cumulative Savings: ${:.2}", summary.final_cumulative_savings);
    println!("  Final Property Equity: ${:.2}", summary.final_property_equity);
    println!("  Final Total Assets: ${:.2}", summary.final_total_assets);
}
