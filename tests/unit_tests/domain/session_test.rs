use docent::domain::{Chunk, ContentType, Document, Embedding, Session, SessionId, VectorIndex};

fn indexed_document(name: &str) -> (Document, VectorIndex) {
    let document = Document::new(name.to_string(), ContentType::Text, format!("text of {name}"));
    let index = VectorIndex::from_parts(
        vec![Chunk::new(0, 0, document.text().to_string())],
        vec![Embedding::new(vec![1.0, 0.0])],
    )
    .unwrap();
    (document, index)
}

#[test]
fn given_new_session_when_inspecting_then_holds_nothing() {
    let session = Session::new();

    assert!(!session.has_document());
    assert!(session.index().is_empty());
}

#[test]
fn given_session_with_document_when_replacing_then_previous_pair_is_gone() {
    let mut session = Session::with_id(SessionId::new());
    let (first, first_index) = indexed_document("first.txt");
    let (second, second_index) = indexed_document("second.txt");
    let second_id = second.id;

    session.replace_document(first, first_index);
    session.replace_document(second, second_index.clone());

    assert_eq!(session.document().map(|d| d.id), Some(second_id));
    assert_eq!(session.index(), &second_index);
}

#[test]
fn given_session_with_document_when_clearing_then_document_and_index_are_dropped() {
    let mut session = Session::new();
    let (document, index) = indexed_document("notes.txt");
    session.replace_document(document, index);

    session.clear();

    assert!(session.document().is_none());
    assert!(session.index().is_empty());
}
