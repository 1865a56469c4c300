// Corpus indexing tests
//
// Builds indexes from synthetic corpus trees and checks both the
// postings and the reported statistics.

use crate::common::{assert_valid_stats, build_services, doc, test_config, TestCorpus};
use sift::core::services::Services;
use sift::SiftError;

#[test]
fn test_index_small_corpus() {
    let corpus = TestCorpus::small();
    let services = build_services(&corpus);

    assert_valid_stats(&services.stats);
    assert_eq!(services.stats.files_read, 1);
    assert_eq!(services.stats.documents_indexed, 2);
    assert_eq!(services.stats.terms, 3);
    assert_eq!(services.stats.postings, 4);

    let index = &services.index;
    assert_eq!(index.postings("cat").unwrap().sorted(), vec!["D1"]);
    assert_eq!(index.postings("dog").unwrap().sorted(), vec!["D1", "D2"]);
    assert_eq!(index.postings("bird").unwrap().sorted(), vec!["D2"]);
    assert!(index.postings("fish").is_none());
}

#[test]
fn test_index_nested_directories() {
    let corpus = TestCorpus::xyz();
    let services = build_services(&corpus);

    assert_eq!(services.stats.files_read, 2);
    assert_eq!(services.stats.documents_indexed, 4);
    assert_eq!(services.index.postings("y").unwrap().sorted(), vec!["2", "3"]);
}

#[test]
fn test_index_all_fields() {
    let corpus = TestCorpus::with_files(&[(
        "fields",
        "<DOC>\n<DOCID> LA1 </DOCID>\n<TITLE>alpha</TITLE>\n<HEADING>beta</HEADING>\n\
         <TEXT><P>gamma</P>\n<P>delta</P></TEXT>\n<BYLINE>omega</BYLINE>\n</DOC>\n",
    )]);
    let services = build_services(&corpus);

    for term in ["alpha", "beta", "gamma", "delta"] {
        assert_eq!(
            services.index.postings(term).map(|p| p.sorted()),
            Some(vec!["LA1"]),
            "term {term} should be indexed for LA1"
        );
    }
    // Fields other than TITLE, HEADING and TEXT are not indexed
    assert!(!services.index.contains_term("omega"));
}

#[test]
fn test_fields_do_not_fuse() {
    let corpus = TestCorpus::with_files(&[(
        "fused",
        "<DOC><DOCID>F1</DOCID><TITLE>head</TITLE><TEXT>line</TEXT></DOC>",
    )]);
    let services = build_services(&corpus);

    assert!(services.index.contains_term("head"));
    assert!(services.index.contains_term("line"));
    assert!(!services.index.contains_term("headline"));
}

#[test]
fn test_index_is_case_sensitive() {
    let corpus = TestCorpus::with_files(&[("case", doc("C1", "Cat cat CAT").as_str())]);
    let services = build_services(&corpus);

    assert_eq!(services.stats.terms, 3);
    assert!(services.index.contains_term("Cat"));
    assert!(services.index.contains_term("CAT"));
}

#[test]
fn test_character_references_decoded() {
    let corpus = TestCorpus::with_files(&[("ents", doc("E1", "AT&amp;T caf&#233;").as_str())]);
    let services = build_services(&corpus);

    assert!(services.index.contains_term("AT"));
    assert!(services.index.contains_term("T"));
    assert!(services.index.contains_term("café"));
}

#[test]
fn test_duplicate_document_ids_counted() {
    let corpus = TestCorpus::with_files(&[
        ("one", doc("D1", "first").as_str()),
        ("two", doc("D1", "second").as_str()),
    ]);
    let services = build_services(&corpus);

    assert_eq!(services.stats.duplicate_documents, 1);
    // Both bodies are merged under the one ID
    assert_eq!(services.index.postings("first").unwrap().sorted(), vec!["D1"]);
    assert_eq!(services.index.postings("second").unwrap().sorted(), vec!["D1"]);
}

#[test]
fn test_document_without_id_skipped() {
    let corpus = TestCorpus::with_files(&[(
        "noid",
        ("<DOC><TEXT>orphan</TEXT></DOC>\n".to_string() + &doc("K1", "kept")).as_str(),
    )]);
    let services = build_services(&corpus);

    assert_eq!(services.stats.documents_indexed, 1);
    assert!(!services.index.contains_term("orphan"));
    assert!(services.index.contains_term("kept"));
}

#[test]
fn test_non_utf8_file_skipped() {
    let corpus = TestCorpus::small();
    std::fs::write(corpus.corpus_path().join("binary"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let services = build_services(&corpus);

    assert_eq!(services.stats.files_skipped, 1);
    assert_eq!(services.stats.documents_indexed, 2);
}

#[test]
fn test_exclude_patterns() {
    let corpus = TestCorpus::with_files(&[
        ("keep/la1", doc("K1", "kept").as_str()),
        ("skip/la2", doc("S1", "skipped").as_str()),
        ("schema.dtd", doc("X1", "schema").as_str()),
    ]);
    let mut config = test_config(&corpus);
    config.corpus.exclude_patterns.push("**/skip/**".to_string());

    let services = Services::build(config).unwrap();

    assert!(services.index.contains_term("kept"));
    assert!(!services.index.contains_term("skipped"));
    // *.dtd is excluded by default
    assert!(!services.index.contains_term("schema"));
}

#[test]
fn test_oversized_file_counted_as_skipped() {
    let corpus = TestCorpus::small();
    let big = doc("BIG", &format!("needle {}", "x".repeat(1024 * 1024)));
    std::fs::write(corpus.corpus_path().join("big"), big).unwrap();

    let mut config = test_config(&corpus);
    config.corpus.max_file_size_mb = 1;
    let services = Services::build(config).unwrap();

    assert_eq!(services.stats.files_read, 1);
    assert_eq!(services.stats.files_skipped, 1);
    assert!(!services.index.contains_term("needle"));
    assert!(services.index.contains_term("dog"));
}

#[test]
fn test_empty_corpus() {
    let corpus = TestCorpus::with_files(&[]);
    let services = build_services(&corpus);

    assert_eq!(services.stats.documents_indexed, 0);
    assert!(services.index.is_empty());
}

#[test]
fn test_missing_corpus_directory() {
    let corpus = TestCorpus::small();
    let mut config = test_config(&corpus);
    config.corpus.dir = corpus.path().join("does-not-exist");

    let result = Services::build(config);
    assert!(matches!(result, Err(SiftError::InvalidPath(_))));
}
