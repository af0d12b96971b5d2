//! Console report formatting. Pure string builders; callers decide when
//! (and whether) to print.

use std::fmt::Write;

use crate::results::EvalRecord;

/// Formats the interim debug block for one evaluated row.
pub fn interim_report(record: &EvalRecord, processed: u64, total: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- Example {processed}/{total} ---");
    let _ = writeln!(out, "Question:\n{}", record.question);
    let _ = writeln!(out, "\nGold Answer (full):\n{}", record.gold_answer);
    let _ = writeln!(
        out,
        "\nParsed Gold Numeric:\n{}",
        display_opt(&record.parsed_gold_answer)
    );
    let _ = writeln!(
        out,
        "\nPredicted Answer Text:\n{}",
        record.predicted_answer_text
    );
    let _ = writeln!(
        out,
        "\nParsed Predicted Numeric:\n{}",
        display_opt(&record.parsed_predicted_answer)
    );
    let _ = writeln!(out, "\nCorrect? {}", record.correct);
    let _ = writeln!(out, "Running Accuracy: {:.2}%", record.running_accuracy);
    let _ = write!(out, "{}", "-".repeat(60));
    out
}

/// Formats the final summary after all rows are processed.
pub fn final_report(correct: u64, total: u64) -> String {
    let accuracy = if total > 0 {
        correct as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    format!(
        "\n=== Final Results ===\n\
         Processed examples: {total}\n\
         Correct predictions: {correct}\n\
         Final Accuracy: {accuracy:.2}%"
    )
}

fn display_opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(none)")
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
