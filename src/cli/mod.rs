// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and hands off to Layer 2. This is
// the only layer that prints.
//
//   1. `train`    — fit and save a model
//   2. `classify` — label one text (--text) or a JSON batch (-i)
//   3. `evaluate` — score a seeded held-out split

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ClassifyArgs, Commands, EvaluateArgs, TrainArgs};

use crate::application::classify_use_case::{check_output_path, ClassifyUseCase};
use crate::application::evaluate_use_case::EvaluateUseCase;
use crate::application::train_use_case::TrainUseCase;
use crate::domain::label::Label;

#[derive(Parser, Debug)]
#[command(
    name = "tweet-sentiment",
    version,
    about = "Tri-class tweet sentiment: three pairwise classifiers and an agreement vote."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => run_train(args),
            Commands::Classify(args) => run_classify(args),
            Commands::Evaluate(args) => run_evaluate(args),
        }
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    tracing::info!("Starting training on corpus: {}", args.corpus);

    let use_case = TrainUseCase::new(args.into());
    use_case.execute()?;

    println!("Training complete. Model saved to '{}'.", use_case.config().model_dir);
    Ok(())
}

fn run_classify(args: ClassifyArgs) -> Result<()> {
    if let Some(text) = &args.text {
        let result = ClassifyUseCase::new(&args.model_dir)?.classify_text(text)?;
        println!("{}", result.label);
        return Ok(());
    }

    // Checked before the model is loaded
    check_output_path(&args.outfile)?;
    let Some(infile) = &args.infile else {
        anyhow::bail!("Either --infile or --text is required");
    };

    let results = ClassifyUseCase::new(&args.model_dir)?.classify_file(infile, &args.outfile)?;

    let count = |label: Label| results.iter().filter(|r| r.label == label).count();
    println!(
        "Classified {} texts: {} positive, {} negative, {} neutral → '{}'",
        results.len(),
        count(Label::Positive),
        count(Label::Negative),
        count(Label::Neutral),
        args.outfile.display()
    );
    Ok(())
}

fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    let metrics = EvaluateUseCase::new(args.train.into(), args.train_fraction).execute()?;
    let m = &metrics.confusion;

    println!("Accuracy: {:.4} ({} / {})", metrics.accuracy(), m.correct(), m.total());
    println!("{:>10} {:>9} {:>9} {:>9}", "true\\pred", "NEGATIVE", "POSITIVE", "NEUTRAL");
    for actual in Label::ALL {
        println!(
            "{:>10} {:>9} {:>9} {:>9}",
            actual.as_str(),
            m.count(actual, Label::Negative),
            m.count(actual, Label::Positive),
            m.count(actual, Label::Neutral)
        );
    }
    Ok(())
}
