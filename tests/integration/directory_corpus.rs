//! Searching a folder of text files.

use std::fs;

use super::common::*;
use lexvec::{
    search, CorpusProvider, DirectoryCorpus, JsonCorpus, PipelineConfig, SearchError,
    SearchRequest,
};

#[test]
fn test_directory_search_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[
            ("espada.txt", "La espada del rey brilla en la torre"),
            ("escudo.txt", "El escudo protege al caballero"),
            ("mar.txt", "Las olas del mar golpean el puerto"),
            ("README.md", "espada espada espada"),
        ],
    );

    let provider = DirectoryCorpus::new(dir.path());
    let request = SearchRequest::new("la espada")
        .weights(vec![0.0, 0.0])
        .pipeline(PipelineConfig::new(false, true, false));
    let outcome = search(&provider, &resources(), &request).unwrap();

    assert_eq!(outcome.ids(), vec!["espada.txt"]);
    assert_ranking_well_formed(&outcome.ranking);
}

#[test]
fn test_directory_is_reread_on_every_search() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path(), &[("a.txt", "escudo de madera")]);
    let provider = DirectoryCorpus::new(dir.path());
    let request = SearchRequest::new("espada");

    let before = search(&provider, &resources(), &request).unwrap();
    assert!(before.ranking.is_no_relevant_results());

    write_corpus(dir.path(), &[("b.txt", "espada de acero")]);
    let after = search(&provider, &resources(), &request).unwrap();
    assert_eq!(after.ids(), vec!["b.txt"]);
}

#[test]
fn test_empty_directory_is_empty_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let err = search(
        &DirectoryCorpus::new(dir.path()),
        &resources(),
        &SearchRequest::new("espada"),
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::EmptyCorpus));
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = search(
        &DirectoryCorpus::new(&missing),
        &resources(),
        &SearchRequest::new("espada"),
    )
    .unwrap_err();
    match err {
        SearchError::CorpusIo { path, .. } => assert_eq!(path, missing),
        other => panic!("expected CorpusIo, got {:?}", other),
    }
}

#[test]
fn test_invalid_utf8_document_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();
    let err = DirectoryCorpus::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, SearchError::CorpusIo { .. }));
}

#[test]
fn test_directory_order_is_by_file_name() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(
        dir.path(),
        &[("c.txt", "espada"), ("a.txt", "espada"), ("b.txt", "espada")],
    );
    let outcome = search(
        &DirectoryCorpus::new(dir.path()),
        &resources(),
        &SearchRequest::new("espada"),
    )
    .unwrap();
    assert_eq!(outcome.ids(), vec!["a.txt", "b.txt", "c.txt"]);
}

#[test]
fn test_json_corpus_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corpus.json");
    fs::write(
        &path,
        r#"[
            {"id": "uno", "text": "el caballero y su espada"},
            {"id": "dos", "text": "el barco en el puerto"}
        ]"#,
    )
    .unwrap();

    let outcome = search(
        &JsonCorpus::new(&path),
        &resources(),
        &SearchRequest::new("espada"),
    )
    .unwrap();
    assert_eq!(outcome.ids(), vec!["uno"]);
}
