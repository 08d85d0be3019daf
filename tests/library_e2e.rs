//! End-to-end tests running the full pipeline through a file-backed store.

use cannery::{
    extract_categories, render_document, FileStore, ImportMode, ResponseLibrary, ResponsePatch,
};

const TRIAGE_DOC: &str = "\
# Triage Responses

## need-str
ID: need-str
Title: Ask for Steps to Reproduce
Categories: need-info, str
Description: Ask the reporter for STR

Hi, and thanks for filing this bug!

Please provide **Steps to Reproduce**.

## worksforme
Title: Works For Me
Categories: resolution

I was unable to reproduce this on the latest Nightly.
If you still see the problem, please reopen with more details.
";

#[test]
fn test_import_persist_and_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("responses.json");

    {
        let mut library = ResponseLibrary::with_store(FileStore::new(&path));
        let update = library.import_document(TRIAGE_DOC, ImportMode::Replace);
        assert_eq!(update.responses.len(), 2);

        let need_str = library.get_by_id("need-str").unwrap();
        assert_eq!(need_str.title, "Ask for Steps to Reproduce");
        assert_eq!(need_str.categories, vec!["need-info", "str"]);
        assert_eq!(need_str.description.as_deref(), Some("Ask the reporter for STR"));
        assert_eq!(
            need_str.body_template,
            "Hi, and thanks for filing this bug!\n\nPlease provide **Steps to Reproduce**."
        );

        // No explicit id: derived from the heading.
        assert!(library.get_by_id("worksforme").is_some());
    }

    // A fresh library over the same file restores the prior session.
    let mut library = ResponseLibrary::with_store(FileStore::new(&path));
    assert_eq!(library.get_all().len(), 2);

    library.save_response(ResponsePatch::new("worksforme").with_description("Close as WFM"));
    assert!(library.delete_response("need-str"));

    let library = ResponseLibrary::with_store(FileStore::new(&path));
    assert_eq!(library.get_all().len(), 1);
    let wfm = library.get_by_id("worksforme").unwrap();
    assert_eq!(wfm.description.as_deref(), Some("Close as WFM"));
    // The shallow patch left the body alone.
    assert!(wfm.body_template.contains("latest Nightly"));
}

#[test]
fn test_replace_then_merge_semantics() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("responses.json");
    let mut library = ResponseLibrary::with_store(FileStore::new(&path));

    library.import_document(TRIAGE_DOC, ImportMode::Replace);

    let doc_b = "## need-str\nID: need-str\nTitle: STR, please\nCategories: str\nNew body.\n\n\
                 ## needinfo-reporter\nID: needinfo-reporter\nCategories: need-info\nPing.\n";
    library.import_document(doc_b, ImportMode::Merge);

    let ids: Vec<String> = library.get_all().into_iter().map(|r| r.id).collect();
    // Pre-existing records keep their position; new ids append in parse order.
    assert_eq!(ids, vec!["need-str", "worksforme", "needinfo-reporter"]);

    // Merge fully overwrote need-str, dropping its old description.
    let need_str = library.get_by_id("need-str").unwrap();
    assert_eq!(need_str.title, "STR, please");
    assert_eq!(need_str.description, None);
    assert_eq!(need_str.body_template, "New body.");

    let categories = extract_categories(&library.get_all());
    assert_eq!(categories, vec!["need-info", "resolution", "str"]);
}

#[test]
fn test_export_import_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut library =
        ResponseLibrary::with_store(FileStore::new(dir.path().join("responses.json")));
    library.import_defaults();
    let original = library.get_all();

    let rendered = render_document(&original);
    let reparsed = library.parse(&rendered);
    assert_eq!(reparsed, original);
}

#[test]
fn test_duplicate_ids_across_sections_are_suffixed_before_merge() {
    let dir = tempfile::tempdir().unwrap();
    let mut library =
        ResponseLibrary::with_store(FileStore::new(dir.path().join("responses.json")));

    let doc = "## dup\nID: same-id\none\n## dup two\nID: same-id\ntwo\n## dup three\nID: same-id\nthree\n";
    library.import_document(doc, ImportMode::Replace);

    let ids: Vec<String> = library.get_all().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["same-id", "same-id-2", "same-id-3"]);
}
