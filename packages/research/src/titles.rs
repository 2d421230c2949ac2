//! SEO page-title and meta-description candidates.

use chrono::{Datelike, Local};
use std::fmt::Write;

use crate::types::keyword::Keyword;

/// Candidate titles and descriptions for one keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSet {
    pub titles: Vec<String>,
    pub descriptions: Vec<String>,
    /// Titles of the search results the corpus was built from
    pub observed: Vec<String>,
}

impl TitleSet {
    /// Contents of `seo_titles.txt`.
    pub fn render(&self) -> String {
        let mut out = String::from("Page Titles\n\n");
        for (i, title) in self.titles.iter().enumerate() {
            let _ = writeln!(out, "{}. {}\n", i + 1, title);
        }
        out.push_str("\nMeta Descriptions\n\n");
        for (i, desc) in self.descriptions.iter().enumerate() {
            let _ = writeln!(out, "{}. {}\n", i + 1, desc);
        }
        if !self.observed.is_empty() {
            out.push_str("\nObserved Result Titles\n\n");
            for (i, title) in self.observed.iter().enumerate() {
                let _ = writeln!(out, "{}. {}\n", i + 1, title);
            }
        }
        out
    }
}

#[derive(Debug, Clone)]
pub struct TitleGenerator {
    year: i32,
}

impl Default for TitleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleGenerator {
    /// Generator stamped with the current year.
    pub fn new() -> Self {
        Self {
            year: Local::now().year(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn generate(&self, keyword: &Keyword, observed: Vec<String>) -> TitleSet {
        let k = keyword.title_case();
        TitleSet {
            titles: vec![
                format!("The Ultimate {k} Guide: Complete Step-by-Step [{}]", self.year),
                format!("How to {k}: Expert Strategies & Best Practices"),
                format!("What is {k}? Complete Beginner's Guide"),
                format!("{k} 101: Everything You Need to Know"),
                format!("Best {k} Tips: Proven Strategies from Experts"),
            ],
            descriptions: vec![
                format!("Learn {k} with our comprehensive guide. Discover strategies, best practices, examples, and expert tips."),
                format!("Complete guide to {k}. Get step-by-step instructions, proven tactics, and professional insights."),
                format!("Master {k} with our resource. Includes tips, tools, case studies, and everything you need."),
                format!("Everything about {k} here. Guide, strategies, examples, and actionable advice."),
            ],
            observed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_use_title_case() {
        let set = TitleGenerator::new()
            .with_year(2026)
            .generate(&Keyword::new("cold brew").unwrap(), vec![]);

        assert_eq!(set.titles.len(), 5);
        assert_eq!(set.descriptions.len(), 4);
        assert_eq!(
            set.titles[0],
            "The Ultimate Cold Brew Guide: Complete Step-by-Step [2026]"
        );
        assert!(set.descriptions.iter().all(|d| d.contains("Cold Brew")));
    }

    #[test]
    fn test_render_sections() {
        let set = TitleGenerator::new().generate(
            &Keyword::new("cold brew").unwrap(),
            vec!["How to Make Cold Brew at Home".to_string()],
        );
        let text = set.render();

        assert!(text.starts_with("Page Titles\n\n1. "));
        assert!(text.contains("\nMeta Descriptions\n\n1. Learn Cold Brew"));
        assert!(text.contains("Observed Result Titles\n\n1. How to Make Cold Brew at Home"));
    }

    #[test]
    fn test_render_without_observed_titles() {
        let set = TitleGenerator::new().generate(&Keyword::new("x").unwrap(), vec![]);
        assert!(!set.render().contains("Observed"));
    }
}
