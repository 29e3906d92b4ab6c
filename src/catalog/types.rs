//! Catalog data types

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One email template as served by the catalog API.
///
/// Missing `subject` or `html` fields deserialize to empty strings so a
/// sparse record still shows up in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    /// Opaque identity used only to tell list entries apart
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "templateId")]
    pub template_id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub html: String,
}

impl TemplateRecord {
    pub fn new(
        template_id: impl Into<String>,
        subject: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            template_id: template_id.into(),
            subject: subject.into(),
            html: html.into(),
        }
    }
}

/// An ordered snapshot of the catalog, as returned by one fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<TemplateRecord>,
}

impl TemplateCatalog {
    pub fn new(templates: Vec<TemplateRecord>) -> Self {
        Self { templates }
    }

    /// Templates in the order the API returned them
    pub fn templates(&self) -> &[TemplateRecord] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Look up a template by its `templateId`
    pub fn get(&self, template_id: &str) -> Option<&TemplateRecord> {
        self.templates
            .iter()
            .find(|template| template.template_id == template_id)
    }

    /// Like [`TemplateCatalog::get`] but reports a missing id as an error
    pub fn require(&self, template_id: &str) -> Result<&TemplateRecord> {
        self.get(template_id)
            .ok_or_else(|| Error::not_found(template_id))
    }
}

impl From<Vec<TemplateRecord>> for TemplateCatalog {
    fn from(templates: Vec<TemplateRecord>) -> Self {
        Self::new(templates)
    }
}
