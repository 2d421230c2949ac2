//! Fixed-structure topical outline.

use std::fmt;

use crate::types::keyword::Keyword;

/// Section headings and their placeholder bullets, in order.
pub const SECTIONS: &[(&str, &[&str])] = &[
    ("Introduction", &["Define the concept", "Why it matters"]),
    ("Benefits", &["Benefit 1", "Benefit 2"]),
    ("How It Works", &["Concept 1", "Concept 2"]),
    ("Best Practices", &["Practice 1", "Practice 2"]),
    ("Common Mistakes", &["Mistake 1", "Mistake 2"]),
    ("Tools", &["Tool 1", "Tool 2"]),
    ("FAQ", &["Q1: ...?", "Q2: ...?"]),
    ("Conclusion", &["Summary", "Next steps"]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineSection {
    pub heading: String,
    pub points: Vec<String>,
}

/// Article outline: a title and the fixed section list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    pub title: String,
    pub sections: Vec<OutlineSection>,
}

impl Outline {
    /// Markdown rendering, as persisted to `outline.md`.
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "## {}", section.heading)?;
            for point in &section.points {
                writeln!(f, "- {point}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutlineGenerator;

impl OutlineGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Instantiate the template; only the title depends on the keyword.
    pub fn generate(&self, keyword: &Keyword) -> Outline {
        Outline {
            title: keyword.title_case(),
            sections: SECTIONS
                .iter()
                .map(|(heading, points)| OutlineSection {
                    heading: heading.to_string(),
                    points: points.iter().map(|p| p.to_string()).collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cold_brew_outline() {
        let keyword = Keyword::new("cold brew").unwrap();
        let markdown = OutlineGenerator::new().generate(&keyword).to_markdown();

        assert!(markdown.starts_with("# Cold Brew\n"));
        for heading in [
            "## Introduction",
            "## Benefits",
            "## How It Works",
            "## Best Practices",
            "## Common Mistakes",
            "## Tools",
            "## FAQ",
            "## Conclusion",
        ] {
            assert!(markdown.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let outline = OutlineGenerator::new().generate(&Keyword::new("x").unwrap());
        let headings: Vec<&str> = outline.sections.iter().map(|s| s.heading.as_str()).collect();
        let expected: Vec<&str> = SECTIONS.iter().map(|(h, _)| *h).collect();
        assert_eq!(headings, expected);
        assert!(outline.sections.iter().all(|s| s.points.len() == 2));
    }

    #[test]
    fn test_keyword_only_changes_title() {
        let generator = OutlineGenerator::new();
        let a = generator.generate(&Keyword::new("cold brew").unwrap());
        let b = generator.generate(&Keyword::new("pour over").unwrap());
        assert_ne!(a.title, b.title);
        assert_eq!(a.sections, b.sections);
    }
}
