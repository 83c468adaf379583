/// A contiguous window of a document's text.
///
/// `offset` counts characters from the start of the document, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub offset: usize,
    pub text: String,
}

impl Chunk {
    pub fn new(index: usize, offset: usize, text: String) -> Self {
        Self {
            index,
            offset,
            text,
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Exclusive end offset, in characters.
    pub fn end(&self) -> usize {
        self.offset + self.char_len()
    }
}
