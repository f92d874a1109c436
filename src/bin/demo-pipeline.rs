/// Demo: run the full feature pipeline over an inline snapshot
/// Stages: Schema Gate → Quality Report → Derive → Filter → Project
use anyhow::Result;
use churn_features::{
    logging,
    pipeline::{PipelineRunner, FEATURE_COLUMNS, SOURCE_TABLE},
    SourceTable,
};
use serde_json::json;

fn main() -> Result<()> {
    logging::init_logging();

    println!("\nCHURN FEATURE PIPELINE DEMO");
    println!("{}", "=".repeat(60));

    let rows = json!([
        {
            "customerID": "7590-VHVEG", "gender": "Female", "tenure": 1,
            "MonthlyCharges": 29.85, "TotalCharges": "29.85",
            "Contract": "Month-to-month", "PaymentMethod": "Electronic check",
            "PaperlessBilling": "Yes", "InternetService": "DSL",
            "OnlineSecurity": "No", "OnlineBackup": "Yes",
            "TechSupport": "No", "Churn": "No"
        },
        {
            "customerID": "5575-GNVDE", "gender": "Male", "tenure": 34,
            "MonthlyCharges": 56.95, "TotalCharges": "1889.5",
            "Contract": "One year", "PaymentMethod": "Mailed check",
            "PaperlessBilling": "No", "InternetService": "DSL",
            "OnlineSecurity": "Yes", "OnlineBackup": "No",
            "TechSupport": "No", "Churn": "No"
        },
        {
            // Blank TotalCharges: counted in the report, excluded from output
            "customerID": "3668-QPYBK", "gender": "Male", "tenure": 2,
            "MonthlyCharges": 53.85, "TotalCharges": " ",
            "Contract": "Month-to-month", "PaymentMethod": "Electronic check",
            "PaperlessBilling": "Yes", "InternetService": "Fiber optic",
            "OnlineSecurity": "Yes", "OnlineBackup": "Yes",
            "TechSupport": "No", "Churn": "Yes"
        }
    ]);

    let table = SourceTable::from_json(SOURCE_TABLE, &rows)?;
    let runner = PipelineRunner::new();
    let run = runner.run(Some(&table))?;

    println!("\nQuality report (pre-filter):");
    for metric in &run.quality.metrics {
        println!("  {:<22} {}", metric.name, metric.count);
    }

    println!("\nEmitted {} of {} raw records", run.emitted_count, run.raw_count);
    println!("Columns: {}", FEATURE_COLUMNS.join(", "));
    for record in &run.features {
        println!(
            "  {} months={} price={} ltv={} adoption={} churned={}",
            record.customer_id,
            record.months_active,
            record.subscription_price,
            record.lifetime_value,
            record.feature_adoption_score,
            record.churned
        );
    }

    println!("{}", "=".repeat(60));
    Ok(())
}
