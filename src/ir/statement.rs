use super::Printable;
use crate::error::Result;
use crate::languages::LanguageDefinition;

/// One statement of a method body. Line text is complete (terminator
/// included); a block owns its header and nested statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Line(String),
    Block { header: String, body: Vec<Statement> },
}

impl Statement {
    pub fn line(code: impl Into<String>) -> Self {
        Self::Line(code.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<Statement>) -> Self {
        Self::Block {
            header: header.into(),
            body,
        }
    }

    /// Append the printed lines at `depth` to `out`. Embedded newlines in a
    /// line or header keep their own relative indentation.
    pub fn print_lines(&self, language: &LanguageDefinition, depth: usize, out: &mut Vec<String>) {
        let indent = language.indent.repeat(depth);

        match self {
            Self::Line(code) => {
                out.extend(code.lines().map(|part| format!("{indent}{part}")));
            }
            Self::Block { header, body } => {
                let mut header_lines: Vec<&str> = header.lines().collect();
                let last = header_lines.pop().unwrap_or_default();
                out.extend(header_lines.iter().map(|part| format!("{indent}{part}")));
                out.push(format!("{indent}{last}{}", language.block_open));

                if body.is_empty() {
                    if let Some(empty) = language.empty_block {
                        out.push(format!("{indent}{}{empty}", language.indent));
                    }
                }
                for statement in body {
                    statement.print_lines(language, depth + 1, out);
                }

                if let Some(close) = language.block_close {
                    out.push(format!("{indent}{close}"));
                }
            }
        }
    }
}

impl Printable for Statement {
    fn print(&self, language: &LanguageDefinition) -> Result<String> {
        let mut lines = Vec::new();
        self.print_lines(language, 0, &mut lines);
        Ok(lines.join("\n"))
    }
}
