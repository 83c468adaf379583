mod composite_extractor;
mod fixed_window_splitter;
mod pdf_adapter;
mod plain_text_adapter;
mod text_sanitizer;

pub use composite_extractor::CompositeExtractor;
pub use fixed_window_splitter::FixedWindowSplitter;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use text_sanitizer::sanitize_extracted_text;
