use crate::{
    answer::parse_answer,
    dataset::{Dataset, Gsm8kExample},
    error::EvalError,
    generation::GenerationProvider,
    results::{EvalRecord, ResultsLog},
};

use super::config::{EvalConfig, EvalSummary};

/// Fixed instruction appended to the question under chain-of-thought
/// prompting.
pub(crate) const COT_SUFFIX: &str = "Let's solve this step by step:";

/// Called after every appended record with the record, the number of rows
/// processed so far (history included), and the dataset total.
pub type ProgressFn = dyn Fn(&EvalRecord, u64, u64) + Send + Sync;

/// Drives one sequential evaluation pass over the unprocessed rows of a
/// dataset.
///
/// Generation failures are not retried; the first error aborts the run,
/// leaving the results log consistent up to the last appended row so a
/// restart resumes where this run stopped.
pub struct Evaluator {
    provider: Box<dyn GenerationProvider>,
    config: EvalConfig,
    progress: Option<Box<ProgressFn>>,
}

impl Evaluator {
    pub fn new(provider: Box<dyn GenerationProvider>, config: EvalConfig) -> Self {
        Self {
            provider,
            config,
            progress: None,
        }
    }

    /// Registers a callback observing each appended record.
    pub fn progress<F>(mut self, f: F) -> Self
    where
        F: Fn(&EvalRecord, u64, u64) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(f));
        self
    }

    /// Evaluates every row from the log's resume point to the end of the
    /// dataset, appending one record per row.
    pub async fn run(
        &self,
        dataset: &dyn Dataset,
        results: &mut ResultsLog,
    ) -> Result<EvalSummary, EvalError> {
        let total = dataset.len() as u64;
        let start = results.start_index();
        if start > 0 {
            log::info!("resuming at row {start} of {total}");
        }

        for id in start..total {
            let example = dataset.get(id as usize).ok_or_else(|| {
                EvalError::Dataset(format!("row {id} missing from dataset of {total}"))
            })?;

            let record = self
                .evaluate_example(id, example, results.correct_so_far())
                .await?;
            results.append(&record)?;

            if let Some(progress) = &self.progress {
                progress(&record, id + 1, total);
            }
        }

        Ok(EvalSummary::new(total, results.correct_so_far()))
    }

    /// Scores a single row. `correct_so_far` is the tally before this row,
    /// replayed history included.
    async fn evaluate_example(
        &self,
        id: u64,
        example: &Gsm8kExample,
        correct_so_far: u64,
    ) -> Result<EvalRecord, EvalError> {
        let parsed_gold_answer = parse_answer(&example.answer);
        if parsed_gold_answer.is_none() {
            log::warn!("row {id}: gold answer contains no numeral");
        }

        let prompt = build_prompt(&example.question, self.config.chain_of_thought);
        let generated = self.provider.generate(&prompt, &self.config.params).await?;
        let parsed_predicted_answer = parse_answer(&generated);

        let correct = match (&parsed_gold_answer, &parsed_predicted_answer) {
            // Exact string comparison: "42" and "42.0" are distinct.
            (Some(gold), Some(predicted)) => gold == predicted,
            _ => false,
        };

        // Row ids are contiguous from 0, so id + 1 is the number of rows
        // processed so far including resumed history.
        let processed = id + 1;
        let running_correct = correct_so_far + u64::from(correct);
        let running_accuracy = running_correct as f64 / processed as f64 * 100.0;

        Ok(EvalRecord {
            id,
            question: example.question.clone(),
            gold_answer: example.answer.clone(),
            parsed_gold_answer,
            predicted_answer_text: generated,
            parsed_predicted_answer,
            correct,
            running_accuracy,
        })
    }
}

/// Builds the prompt for one question, optionally with the chain-of-thought
/// suffix.
pub fn build_prompt(question: &str, chain_of_thought: bool) -> String {
    if chain_of_thought {
        format!("{question}\n{COT_SUFFIX}\n")
    } else {
        question.to_string()
    }
}
