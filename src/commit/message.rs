//! Structured view of a commit message
//!
//! Rebuilt from the document lines after every edit. The model never
//! forces the git conventions on the text, it only describes the shape:
//!
//! ```text
//! line 0      title
//! line 1      separator (empty) - or the first body line when non-empty
//! line 2..    body: paragraphs separated by blank lines
//! # ...       git comment block, everything from the first `#` line on
//! ```

use super::{char_len, is_blank, is_comment};

/// A maximal run of non-blank body lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Document line index of the first line
    pub start_line: usize,
    /// The raw lines, unmodified
    pub lines: Vec<String>,
}

impl Paragraph {
    /// Document line index one past the last line
    pub fn end_line(&self) -> usize {
        self.start_line + self.lines.len()
    }

    /// Whether the given document line belongs to this paragraph
    pub fn contains_line(&self, line: usize) -> bool {
        (self.start_line..self.end_line()).contains(&line)
    }

    /// The paragraph as a single newline-joined string
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// One block of the body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyBlock {
    /// Prose, trailers, lists - anything non-blank
    Paragraph(Paragraph),
    /// A blank line, kept verbatim (may contain whitespace)
    Blank(String),
}

/// The parsed commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// Line 0 of the document, always present
    pub title: String,
    /// Whether line 1 exists and is empty
    pub separator: bool,
    /// Body blocks in document order
    pub body: Vec<BodyBlock>,
    /// Git comment lines (`# ...`) and everything after the first one
    pub comments: Vec<String>,
}

impl CommitMessage {
    /// Build the model from document lines
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Self {
        let title = lines
            .first()
            .map(|l| l.as_ref().to_string())
            .unwrap_or_default();

        let separator = lines.get(1).is_some_and(|l| l.as_ref().is_empty());
        let body_start = if separator { 2 } else { 1 };

        let mut body = Vec::new();
        let mut comments = Vec::new();
        let mut current: Option<Paragraph> = None;

        for (idx, line) in lines.iter().enumerate().skip(body_start) {
            let line = line.as_ref();

            if !comments.is_empty() || is_comment(line) {
                comments.push(line.to_string());
                continue;
            }

            if is_blank(line) {
                if let Some(paragraph) = current.take() {
                    body.push(BodyBlock::Paragraph(paragraph));
                }
                body.push(BodyBlock::Blank(line.to_string()));
                continue;
            }

            match current.as_mut() {
                Some(paragraph) => paragraph.lines.push(line.to_string()),
                None => {
                    current = Some(Paragraph {
                        start_line: idx,
                        lines: vec![line.to_string()],
                    })
                }
            }
        }

        if let Some(paragraph) = current {
            body.push(BodyBlock::Paragraph(paragraph));
        }

        Self {
            title,
            separator,
            body,
            comments,
        }
    }

    /// Parse from raw text, splitting on `\n` only
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<&str> = text.split('\n').collect();
        Self::parse(&lines)
    }

    /// Title length in characters
    pub fn title_length(&self) -> usize {
        char_len(&self.title)
    }

    /// Document line index where the body starts
    pub fn body_start(&self) -> usize {
        if self.separator {
            2
        } else {
            1
        }
    }

    /// Number of body lines (blank lines included, comments excluded)
    pub fn body_line_count(&self) -> usize {
        self.body
            .iter()
            .map(|block| match block {
                BodyBlock::Paragraph(p) => p.lines.len(),
                BodyBlock::Blank(_) => 1,
            })
            .sum()
    }

    /// Document line index where the comment block starts (or would start)
    pub fn comment_start(&self) -> usize {
        self.body_start() + self.body_line_count()
    }

    /// Body lines in order, without comments
    pub fn body_lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.body_line_count());
        for block in &self.body {
            match block {
                BodyBlock::Paragraph(p) => out.extend(p.lines.iter().cloned()),
                BodyBlock::Blank(line) => out.push(line.clone()),
            }
        }
        out
    }

    /// Iterate over paragraphs only
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|block| match block {
            BodyBlock::Paragraph(p) => Some(p),
            BodyBlock::Blank(_) => None,
        })
    }

    /// The paragraph containing the given document line, if any
    pub fn paragraph_at(&self, line: usize) -> Option<&Paragraph> {
        self.paragraphs().find(|p| p.contains_line(line))
    }

    /// Reassemble the document lines exactly as parsed
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2 + self.body_line_count() + self.comments.len());
        lines.push(self.title.clone());
        if self.separator {
            lines.push(String::new());
        }
        lines.extend(self.body_lines());
        lines.extend(self.comments.iter().cloned());
        lines
    }

    /// Reassemble the document text
    pub fn to_text(&self) -> String {
        self.to_lines().join("\n")
    }
}
