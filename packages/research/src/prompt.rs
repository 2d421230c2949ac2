//! Writing brief handed to a downstream writer.

use std::fmt;

use crate::outline::Outline;
use crate::types::keyword::Keyword;

/// Composed brief plus the numbers it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub word_count: usize,
    pub lower: usize,
    pub upper: usize,
}

impl Prompt {
    /// Acceptable length range as `(lower, upper)`.
    pub fn range(&self) -> (usize, usize) {
        (self.lower, self.upper)
    }

    /// First `max_chars` characters, for log previews.
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// `[floor(0.9 * target), floor(1.1 * target)]`
pub fn acceptable_range(target: usize) -> (usize, usize) {
    let t = target as u128;
    ((t * 9 / 10) as usize, (t * 11 / 10).min(usize::MAX as u128) as usize)
}

/// `12345` -> `"12,345"`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Clone, Default)]
pub struct PromptComposer;

impl PromptComposer {
    pub fn new() -> Self {
        Self
    }

    pub fn compose(&self, keyword: &Keyword, word_count: usize, outline: &Outline) -> Prompt {
        let (lower, upper) = acceptable_range(word_count);
        let text = format!(
            r#"You are a professional SEO content writer. Write an article that meets the requirements below.

[Requirements]
- Keyword: {keyword}
- Length: {target} words
- Format: Markdown

[Outline]
{outline}

[Key Instructions]
1. Avoid AI-sounding prose
   - Say "I found..." instead of "Research shows..."
   - State genuine opinions
   - Avoid stock phrases: "In today's world...", "All things considered...", "It is worth noting that..."

2. Add personal experience
   - At least 2-3 real anecdotes
   - Share failures as well as wins
   - Use concrete numbers

3. Vary sentence structure
   - Mix short and long sentences
   - 3-4 sentences per paragraph
   - Open each paragraph with a topic sentence

4. Keep it conversational
   - Use rhetorical questions
   - Show your doubts and reasoning
   - Invite the reader to think along

[SEO Optimization]
- Keyword density: 1-2%
- Use the main keyword within the first 100 words
- Work long-tail variations into H2/H3 headings
- Include lists and tables
- Include an FAQ section

Now write the article. Keep the length between {lower} and {upper} words."#,
            keyword = keyword,
            target = group_thousands(word_count),
            outline = outline,
            lower = lower,
            upper = upper,
        );

        Prompt {
            text,
            word_count,
            lower,
            upper,
        }
    }
}
