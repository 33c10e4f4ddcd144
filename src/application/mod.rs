// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Each use case strings the lower layers together for one
// command. No math and no printing here: the ml layer does the
// former, the CLI the latter.

// Load corpus → train → save model and config
pub mod train_use_case;

// Load model → classify one text or a JSON batch
pub mod classify_use_case;

// Split corpus → train → score held-out rows → log metrics
pub mod evaluate_use_case;
