//! Card-style message blocks

use std::fmt;
use std::path::PathBuf;

/// A titled block of text with optional fields, thumbnail and footer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<EmbedField>,
    pub thumbnail: Option<PathBuf>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

impl Embed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn thumbnail(mut self, path: PathBuf) -> Self {
        self.thumbnail = Some(path);
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }
}

impl fmt::Display for Embed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if let Some(description) = &self.description {
            writeln!(f, "{}", description)?;
        }
        for field in &self.fields {
            if field.value.is_empty() {
                writeln!(f, "  {}", field.name)?;
            } else {
                writeln!(f, "  {:<10} {}", format!("{}:", field.name), field.value)?;
            }
        }
        if let Some(thumbnail) = &self.thumbnail {
            writeln!(f, "  [{}]", thumbnail.display())?;
        }
        if let Some(footer) = &self.footer {
            writeln!(f, "-- {}", footer)?;
        }
        Ok(())
    }
}
