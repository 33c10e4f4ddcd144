// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands: `train`, `classify` and `evaluate`.
// The application layer never sees clap types; TrainArgs is
// converted into a TrainConfig at the boundary.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::classify_use_case::DEFAULT_OUTFILE;
use crate::application::train_use_case::TrainConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the three pairwise classifiers on a labelled corpus
    Train(TrainArgs),

    /// Classify one text or a JSON file of texts with a trained model
    Classify(ClassifyArgs),

    /// Train on a seeded split of the corpus and score the held-out part
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TrainArgs {
    /// Labelled corpus (.json or .csv)
    #[arg(long, default_value = "data/corpus.json")]
    pub corpus: String,

    /// Directory for model.json, train_config.json and metrics.csv
    #[arg(long, default_value = "models")]
    pub model_dir: String,

    /// Seed for the SVM coordinate order and the evaluate split
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Keep tokens as they are instead of reducing them to stems
    #[arg(long)]
    pub no_stemming: bool,

    /// Logistic regression step size
    #[arg(long, default_value_t = 0.5)]
    pub lr_learning_rate: f64,

    #[arg(long, default_value_t = 1000)]
    pub lr_max_iter: usize,

    /// Logistic regression stops once the cost changes by less than this
    #[arg(long, default_value_t = 1e-8)]
    pub lr_tolerance: f64,

    /// Logistic regression inverse regularisation strength
    #[arg(long, default_value_t = 1.0)]
    pub lr_c: f64,

    /// Naive Bayes additive smoothing
    #[arg(long, default_value_t = 1.0)]
    pub nb_alpha: f64,

    /// SVM penalty on margin violations
    #[arg(long, default_value_t = 1.0)]
    pub svm_c: f64,

    #[arg(long, default_value_t = 1000)]
    pub svm_max_epochs: usize,

    #[arg(long, default_value_t = 1e-4)]
    pub svm_tolerance: f64,

    /// Learn an SVM bias term
    #[arg(long)]
    pub svm_fit_intercept: bool,
}

impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            corpus_path: a.corpus,
            model_dir: a.model_dir,
            seed: a.seed,
            stemming: !a.no_stemming,
            lr_learning_rate: a.lr_learning_rate,
            lr_max_iter: a.lr_max_iter,
            lr_tolerance: a.lr_tolerance,
            lr_c: a.lr_c,
            nb_alpha: a.nb_alpha,
            svm_c: a.svm_c,
            svm_max_epochs: a.svm_max_epochs,
            svm_tolerance: a.svm_tolerance,
            svm_fit_intercept: a.svm_fit_intercept,
        }
    }
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// JSON array of texts, or of objects with a text / full_text field
    #[arg(short = 'i', long, conflicts_with = "text", required_unless_present = "text")]
    pub infile: Option<PathBuf>,

    /// Where to write the results (must end in .json)
    #[arg(short = 'o', long, default_value = DEFAULT_OUTFILE)]
    pub outfile: PathBuf,

    /// Classify this single text and print its label
    #[arg(long)]
    pub text: Option<String>,

    /// Directory the model was saved to by `train`
    #[arg(long, default_value = "models")]
    pub model_dir: String,
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub train: TrainArgs,

    /// Share of the corpus used for training; the rest is validation
    #[arg(long, default_value_t = 0.8)]
    pub train_fraction: f64,
}
