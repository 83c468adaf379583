//! Document question answering over a chunked, in-memory vector index.
//!
//! An upload is extracted to text, cut into overlapping fixed-size windows,
//! embedded once, and kept per session. Queries are embedded with the same
//! embedder and ranked by cosine similarity; the top chunks ground a
//! generated answer. Summaries and tone rewrites go straight to the generator.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
