pub const DEFAULT_ANSWER_TEMPLATE: &str =
    "Answer the question using the following content:\n{context}\n\nQuestion: {question}\nAnswer:";
pub const DEFAULT_SUMMARY_TEMPLATE: &str = "Summarize the following content:\n{text}";
pub const LOCALIZED_SUMMARY_TEMPLATE: &str =
    "Summarize the following content in {language}:\n{text}";
pub const DEFAULT_SUMMARY_LANGUAGE: &str = "Traditional Chinese";
pub const DEFAULT_REWRITE_TEMPLATE: &str =
    "Rewrite the following text in a {tone} tone:\n{text}";
pub const DEFAULT_TONE: &str = "more natural but formal";

/// Prompt text for the three generation modes. Placeholders are replaced
/// literally; unknown placeholders are left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplates {
    pub answer: String,
    pub summary: String,
    pub rewrite: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            answer: DEFAULT_ANSWER_TEMPLATE.to_string(),
            summary: DEFAULT_SUMMARY_TEMPLATE.to_string(),
            rewrite: DEFAULT_REWRITE_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Asks for summaries in `language`. A blank language keeps the current
    /// summary template.
    pub fn with_summary_language(mut self, language: &str) -> Self {
        let language = language.trim();
        if !language.is_empty() {
            self.summary = LOCALIZED_SUMMARY_TEMPLATE.replace("{language}", language);
        }
        self
    }

    pub fn answer_prompt(&self, context: &str, question: &str) -> String {
        self.answer
            .replace("{context}", context)
            .replace("{question}", question)
    }

    /// `truncated` appends an ellipsis so the model knows the text continues.
    pub fn summary_prompt(&self, full_text_prefix: &str, truncated: bool) -> String {
        let text = if truncated {
            format!("{full_text_prefix}...")
        } else {
            full_text_prefix.to_string()
        };
        self.summary.replace("{text}", &text)
    }

    pub fn rewrite_prompt(&self, text: &str, tone: &str) -> String {
        // {tone} first so a literal "{tone}" inside the user text survives.
        self.rewrite.replace("{tone}", tone).replace("{text}", text)
    }
}
