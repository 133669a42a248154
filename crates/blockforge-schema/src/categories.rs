//! Closed category enumerations for the two record kinds.
//!
//! Categories are pure data: a record whose `category` falls outside its
//! kind's enumeration is rejected by the schema validator. The wire form is
//! kebab-case; `label()` gives the title-cased form shown in interactive
//! pickers.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The two record kinds stored in the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A reusable UI component.
    Block,
    /// A complete page.
    Template,
}

impl RecordKind {
    /// Directory name under the source root (`src/blocks`, `src/templates`).
    pub fn dir_name(&self) -> &'static str {
        match self {
            RecordKind::Block => "blocks",
            RecordKind::Template => "templates",
        }
    }

    /// Singular lowercase noun, used in log and error messages.
    pub fn noun(&self) -> &'static str {
        match self {
            RecordKind::Block => "block",
            RecordKind::Template => "template",
        }
    }

    /// Capitalized display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordKind::Block => "Block",
            RecordKind::Template => "Template",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// Shared surface of the two category enumerations, so the validator and the
/// scaffolder can be written once over both record kinds.
pub trait Category:
    Copy + Eq + fmt::Display + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// The record kind this enumeration belongs to.
    const KIND: RecordKind;

    /// Every member of the enumeration, in display order.
    fn all() -> &'static [Self];

    /// Kebab-case wire form.
    fn as_str(&self) -> &'static str;

    /// Parse the kebab-case wire form.
    fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == s)
    }

    /// Title-cased human label: `call-to-action` becomes `Call To Action`.
    fn label(&self) -> String {
        self.as_str()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Categories for block records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockCategory {
    CallToAction,
    Hero,
    Features,
    Testimonials,
    Pricing,
    Footer,
    Header,
    Content,
    Forms,
    Gallery,
}

impl Category for BlockCategory {
    const KIND: RecordKind = RecordKind::Block;

    fn all() -> &'static [Self] {
        &[
            BlockCategory::CallToAction,
            BlockCategory::Hero,
            BlockCategory::Features,
            BlockCategory::Testimonials,
            BlockCategory::Pricing,
            BlockCategory::Footer,
            BlockCategory::Header,
            BlockCategory::Content,
            BlockCategory::Forms,
            BlockCategory::Gallery,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            BlockCategory::CallToAction => "call-to-action",
            BlockCategory::Hero => "hero",
            BlockCategory::Features => "features",
            BlockCategory::Testimonials => "testimonials",
            BlockCategory::Pricing => "pricing",
            BlockCategory::Footer => "footer",
            BlockCategory::Header => "header",
            BlockCategory::Content => "content",
            BlockCategory::Forms => "forms",
            BlockCategory::Gallery => "gallery",
        }
    }
}

impl fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCategory {
            kind: RecordKind::Block,
            value: s.to_string(),
        })
    }
}

/// Categories for template records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    LandingPage,
    Blog,
    Portfolio,
    Product,
    Service,
    Other,
}

impl Category for TemplateCategory {
    const KIND: RecordKind = RecordKind::Template;

    fn all() -> &'static [Self] {
        &[
            TemplateCategory::LandingPage,
            TemplateCategory::Blog,
            TemplateCategory::Portfolio,
            TemplateCategory::Product,
            TemplateCategory::Service,
            TemplateCategory::Other,
        ]
    }

    fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::LandingPage => "landing-page",
            TemplateCategory::Blog => "blog",
            TemplateCategory::Portfolio => "portfolio",
            TemplateCategory::Product => "product",
            TemplateCategory::Service => "service",
            TemplateCategory::Other => "other",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCategory {
            kind: RecordKind::Template,
            value: s.to_string(),
        })
    }
}

/// A category value outside its kind's enumeration.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {kind} category: {value}")]
pub struct UnknownCategory {
    pub kind: RecordKind,
    pub value: String,
}
