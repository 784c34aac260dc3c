use anyhow::{Context, Result};

use crate::config::initialize_app_state;
use crate::loader::load_documents;

/// Loads the documents once and prints a short market summary to stdout.
pub async fn inspect(data_base: &str) -> Result<()> {
    let state = initialize_app_state(data_base);
    load_documents(&state).await?;

    let doc = state
        .prediction()
        .await
        .context("prediction document missing after load")?;

    let overview = compute::market_overview(&doc);
    println!("Prediction data at {}", data_base);
    println!("  stocks:           {}", overview.stock_count);
    println!(
        "  prediction date:  {}",
        overview.prediction_date.as_deref().unwrap_or("N/A")
    );
    println!("  avg 7d return:    {}", overview.avg_expected_return_7d_display);
    println!("  avg volatility:   {}", overview.avg_volatility_7d_display);
    println!("  avg score:        {}", overview.avg_composite_score_display);
    println!("  model epochs:     {}", overview.model_epochs_display);

    println!();
    println!("Top performers by expected 7d return:");
    for row in compute::top_performers(&doc) {
        println!(
            "  {:<8} {:>8.4}  score {:>5.1}  {:?}",
            row.symbol.to_uppercase(),
            row.expected_return_7d,
            row.composite_score,
            row.risk_level,
        );
    }

    if let Some(summary) = state.summary().await {
        let view = compute::recommendations(&summary);
        if let Some(stats) = view.summary {
            println!();
            println!(
                "Summary: {} analyzed, {} successful ({})",
                stats.total_stocks_analyzed,
                stats.successful_predictions,
                stats.success_rate_display,
            );
        }
    } else {
        println!();
        println!("No summary document found; recommendations unavailable.");
    }

    Ok(())
}
