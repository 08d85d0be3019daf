//! Built-in seed responses.
//!
//! The host application normally fetches its default response document from
//! elsewhere; this embedded copy lets a library start useful without any
//! network or prior persisted state.

/// A small starter set of triage responses in the importable document
/// format.
pub const SEED_DOCUMENT: &str = "\
# Default Canned Responses

Everything above the first `## ` heading is ignored by the importer.

## need-str
ID: need-str
Title: Ask for Steps to Reproduce
Categories: need-info, str
Description: Ask the reporter for STR

Hi, and thanks for filing this bug!

To investigate further we need clear **Steps to Reproduce**. Could you list
the exact steps, starting from a fresh profile, that trigger the problem?

## need-regression-window
ID: need-regression-window
Title: Ask for a Regression Window
Categories: need-info, regression
Description: Ask the reporter to run mozregression

Thanks for the report! This looks like a regression.

If you can, please run [mozregression](https://mozilla.github.io/mozregression/)
to narrow down when this started. That makes it much easier to find the
responsible change.

## resolved-duplicate
ID: resolved-duplicate
Title: Close as Duplicate
Categories: resolution
Description: Point the reporter at the original bug

Thanks for filing! This issue is already tracked in another report, so this
bug will be resolved as a duplicate. Please follow the original bug for
updates, and add any details there that are not already covered.

## need-crash-report
ID: need-crash-report
Title: Ask for a Crash Report
Categories: need-info, crash
Description: Ask for a crash ID from about:crashes

Sorry you hit a crash!

Please open `about:crashes`, find the most recent crash matching this bug,
and paste its report ID here so we can look at the stack.
";

#[cfg(test)]
mod tests {
    use crate::parse::parse_document;

    #[test]
    fn test_seed_document_parses_cleanly() {
        let parsed = parse_document(super::SEED_DOCUMENT);
        assert_eq!(parsed.len(), 4);
        for record in &parsed {
            assert!(!record.id.is_empty());
            assert!(!record.body_template.is_empty());
            assert!(record.description.is_some());
        }
    }

    #[test]
    fn test_seed_ids_need_no_suffixing() {
        let parsed = parse_document(super::SEED_DOCUMENT);
        assert!(parsed.iter().all(|r| !r.id.ends_with("-2")));
        assert!(parsed.iter().any(|r| r.id == "need-str"));
    }
}
