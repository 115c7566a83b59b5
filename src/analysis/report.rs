//! Display formatting for prediction results

use super::compare::{Comparison, Relation};
use super::scenario::Scenario;

/// Headline for a single prediction
pub fn score_line(scenario: &Scenario, precision: usize) -> String {
    format!(
        "🌟 Predicted Happiness Score: {:.*}",
        precision, scenario.prediction
    )
}

/// Headline for one side of a comparison
pub fn scenario_score_line(scenario: &Scenario, precision: usize) -> String {
    format!(
        "🌟 {} Happiness Score: {:.*}",
        scenario.name, precision, scenario.prediction
    )
}

/// Sentence describing which scenario is happier
///
/// The magnitude is always printed as a positive number.
pub fn difference_line(comparison: &Comparison, precision: usize) -> String {
    let a = &comparison.scenario_a.name;
    let b = &comparison.scenario_b.name;
    match comparison.relation {
        Relation::BHappier => format!(
            "📈 {} is {:.*} points happier than {}",
            b, precision, comparison.difference, a
        ),
        Relation::AHappier => format!(
            "📉 {} is {:.*} points happier than {}",
            a,
            precision,
            comparison.difference.abs(),
            b
        ),
        Relation::Equal => "⚖️ Both scenarios have the same predicted happiness.".to_string(),
    }
}

/// All lines for a single prediction: headline then commentary
pub fn render_single(scenario: &Scenario, precision: usize) -> Vec<String> {
    let mut lines = vec![score_line(scenario, precision)];
    lines.extend(scenario.explanations.iter().map(|e| e.message.clone()));
    lines
}

/// All lines for a comparison: A's block, B's block, then the difference
pub fn render_comparison(comparison: &Comparison, precision: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for scenario in [&comparison.scenario_a, &comparison.scenario_b] {
        lines.push(scenario_score_line(scenario, precision));
        lines.extend(scenario.explanations.iter().map(|e| e.message.clone()));
    }
    lines.push(difference_line(comparison, precision));
    lines
}
