use serde::Serialize;

use super::Component;

pub const WIDTH_FULL: u16 = 24;
pub const WIDTH_HALF: u16 = 12;
pub const WIDTH_QUARTER: u16 = 6;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummarySection {
    pub header: String,
    pub content: Component,
}

impl SummarySection {
    pub fn new(header: impl Into<String>, content: impl Into<Component>) -> Self {
        Self {
            header: header.into(),
            content: content.into(),
        }
    }
}

/// Ordered header/content pairs.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Summary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub sections: Vec<SummarySection>,
}

impl Summary {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            sections: Vec::new(),
        }
    }

    pub fn with_sections(sections: Vec<SummarySection>) -> Self {
        Self {
            title: None,
            sections,
        }
    }

    pub fn add(&mut self, header: impl Into<String>, content: impl Into<Component>) {
        self.sections.push(SummarySection::new(header, content));
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlexLayoutItem {
    pub width: u16,
    pub view: Component,
}

impl FlexLayoutItem {
    pub fn new(width: u16, view: impl Into<Component>) -> Self {
        Self {
            width,
            view: view.into(),
        }
    }
}

/// Items rendered side by side on one row of a [`FlexLayout`].
pub type FlexLayoutSection = Vec<FlexLayoutItem>;

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct FlexLayout {
    pub title: String,
    pub sections: Vec<FlexLayoutSection>,
}

impl FlexLayout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Empty sections are dropped.
    pub fn add_section(&mut self, section: FlexLayoutSection) {
        if !section.is_empty() {
            self.sections.push(section);
        }
    }
}
