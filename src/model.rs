use serde::{Deserialize, Serialize};

/// A reusable reply template for bug triage.
///
/// Serializes flat with camelCase field names so the record can be handed
/// straight to a JSON consumer; `description` is omitted entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CannedResponse {
    pub id: String,
    pub title: String,
    pub body_template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl CannedResponse {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body_template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body_template: body_template.into(),
            description: None,
            categories: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Renders this response back into its document form: a `## ` heading,
    /// the metadata lines, a blank separator, then the body verbatim.
    ///
    /// Feeding the result back through the parser reproduces the record,
    /// modulo the parser's blank-line trimming of the body.
    pub fn to_document_section(&self) -> String {
        let mut out = String::new();
        out.push_str("## ");
        out.push_str(&self.title);
        out.push('\n');
        out.push_str("ID: ");
        out.push_str(&self.id);
        out.push('\n');
        out.push_str("Title: ");
        out.push_str(&self.title);
        out.push('\n');
        if !self.categories.is_empty() {
            out.push_str("Categories: ");
            out.push_str(&self.categories.join(", "));
            out.push('\n');
        }
        if let Some(description) = &self.description {
            out.push_str("Description: ");
            out.push_str(description);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.body_template);
        out
    }
}

/// Renders a full library back into a single importable document.
pub fn render_document(responses: &[CannedResponse]) -> String {
    let mut out = responses
        .iter()
        .map(CannedResponse::to_document_section)
        .collect::<Vec<_>>()
        .join("\n\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
