#[path = "gsm8k-eval/args.rs"]
mod args;

use clap::Parser;

use gsm8k_eval::backends::openai_compat::OpenAiCompat;
use gsm8k_eval::{report, EvalConfig, Evaluator, JsonlDataset, ResultsLog};

use args::CliArgs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let dataset = JsonlDataset::for_split(&args.data_dir, args.split)?;
    let mut results = ResultsLog::open(&args.results_file)?;

    let provider = OpenAiCompat::new(
        &args.base_url,
        &args.model,
        args.api_key.clone(),
        args.timeout_seconds,
    )?;

    let print_frequency = args.print_frequency.max(1);
    let evaluator = Evaluator::new(Box::new(provider), eval_config(&args)).progress(
        move |record, processed, total| {
            if processed % print_frequency == 0 || processed == total {
                println!("{}", report::interim_report(record, processed, total));
            }
        },
    );

    let summary = evaluator.run(&dataset, &mut results).await?;
    results.close()?;

    println!("{}", report::final_report(summary.correct, summary.total));
    Ok(())
}

fn eval_config(args: &CliArgs) -> EvalConfig {
    EvalConfig::new()
        .chain_of_thought(args.cot)
        .params(args.generation_params())
}
