use serde::{Deserialize, Serialize};

/// One evaluated question, written to the results log exactly once.
///
/// Unknown fields are rejected on deserialization so a log written by a
/// different tool (or a corrupted one) fails loudly instead of resuming
/// from a misread state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvalRecord {
    /// Dataset row index; unique key, contiguous from 0 across resumed runs.
    pub id: u64,
    /// The word problem as prompted.
    pub question: String,
    /// Full gold answer text, reasoning included.
    pub gold_answer: String,
    /// Last numeral found in the gold answer, verbatim.
    pub parsed_gold_answer: Option<String>,
    /// Full generated text from the model.
    pub predicted_answer_text: String,
    /// Last numeral found in the generated text, verbatim.
    pub parsed_predicted_answer: Option<String>,
    /// True iff both parsed numerals are present and string-equal.
    pub correct: bool,
    /// Percentage of correct rows among all rows processed so far,
    /// resumed history included, computed at write time.
    pub running_accuracy: f64,
}
