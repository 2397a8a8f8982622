//! Inline markup rendering for post bodies.
//!
//! Post content uses the site's lightweight convention: a line wrapped in a
//! double-asterisk pair is a subheading, a blank line is a break, anything
//! else is a paragraph.

/// One renderable block of a post body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Heading(String),
    Paragraph(String),
    Break,
}

/// Split a post body into renderable blocks, line by line.
pub fn render_blocks(content: &str) -> Vec<ContentBlock> {
    content
        .split('\n')
        .map(|line| {
            if line.starts_with("**") && line.ends_with("**") {
                // Every `**` is stripped, not just the wrapping pair.
                ContentBlock::Heading(line.replace("**", ""))
            } else if line.trim().is_empty() {
                ContentBlock::Break
            } else {
                ContentBlock::Paragraph(line.to_string())
            }
        })
        .collect()
}
