use std::{fmt, str::FromStr};

use super::nav::NavError;

/// Named anchors on the page that navigation can scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Experience,
    Skills,
    Contact,
}

impl SectionId {
    /// Navigation order, which is also the order the sections render in.
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn ordinal(self) -> usize {
        match self {
            SectionId::About => 1,
            SectionId::Experience => 2,
            SectionId::Skills => 3,
            SectionId::Contact => 4,
        }
    }

    /// Heading prefix such as `01. ABOUT`.
    pub fn heading_label(self) -> String {
        format!("{:02}. {}", self.ordinal(), self.anchor().to_uppercase())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "about" => Ok(SectionId::About),
            "experience" => Ok(SectionId::Experience),
            "skills" => Ok(SectionId::Skills),
            "contact" => Ok(SectionId::Contact),
            other => Err(NavError::UnknownSection(other.to_string())),
        }
    }
}
