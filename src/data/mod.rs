// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a raw corpus file and the token lists the
// vectorizers count:
//
//   corpus file
//       │
//       ▼
//   CorpusLoader      → reads JSON/CSV rows into LabeledExamples
//       │
//       ▼
//   partition         → three pairwise subsets, one label excluded each
//       │
//       ▼
//   TextAnalyzer      → TextNormalizer (clean + TweetTokenizer)
//                       then PorterStemmer
//
// splitter holds back a validation share for the evaluate command.

/// Reads labelled corpus files (JSON or CSV)
pub mod loader;

/// Cleans raw tweet text and tokenizes it
pub mod normalizer;

/// Social-media aware tokenizer
pub mod tokenizer;

/// Porter stemmer
pub mod stemmer;

/// Normalizer + stemmer as one token pipeline
pub mod analyzer;

/// Pairwise subsets of the corpus
pub mod partition;

/// Seeded train/validation split
pub mod splitter;
