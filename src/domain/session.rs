use super::{Document, SessionId, VectorIndex};

/// Everything one user works against: at most one document and the index
/// built from it. Both are swapped together on upload.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub id: SessionId,
    document: Option<Document>,
    index: VectorIndex,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: SessionId) -> Self {
        Self {
            id,
            document: None,
            index: VectorIndex::empty(),
        }
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn index(&self) -> &VectorIndex {
        &self.index
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// Drops the previous document and index and installs the new pair.
    pub fn replace_document(&mut self, document: Document, index: VectorIndex) {
        self.document = Some(document);
        self.index = index;
    }

    pub fn clear(&mut self) {
        self.document = None;
        self.index = VectorIndex::empty();
    }
}
