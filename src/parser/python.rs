//! Python parser using tree-sitter

use anyhow::{Context, Result};
use thiserror::Error;
use tree_sitter::{Language, Node, Parser, Tree};

/// Parser for Python snippets using tree-sitter
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    /// Create a new Python parser
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_python::LANGUAGE.into();
        parser
            .set_language(&language)
            .context("Failed to set Python language")?;
        Ok(Self { parser })
    }

    /// Parse source code into a syntax tree
    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .context("Failed to parse Python source")
    }

    /// Get the tree-sitter language for Python
    pub fn language() -> Language {
        tree_sitter_python::LANGUAGE.into()
    }
}

/// How a snippet failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A localized syntax error with a 1-indexed line number
    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },
    /// The parser itself failed to produce a tree
    #[error("Error parsing code: {0}")]
    Parser(String),
}

/// Check a snippet for syntax errors. `Ok(())` means the snippet parses
/// cleanly as a Python program.
pub fn check_syntax(source: &str) -> Result<(), ParseError> {
    let mut parser = PythonParser::new().map_err(|e| ParseError::Parser(e.to_string()))?;
    let tree = parser
        .parse(source)
        .map_err(|e| ParseError::Parser(e.to_string()))?;

    let root = tree.root_node();
    if !root.has_error() {
        return Ok(());
    }

    let node = first_error(root);
    let line = node.map(|n| n.start_position().row + 1).unwrap_or(1);
    let message = node
        .map(describe_error)
        .unwrap_or_else(|| "invalid syntax".to_string());
    Err(ParseError::Syntax { line, message })
}

/// Depth-first search for the first ERROR or missing node
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found
}

fn describe_error(node: Node<'_>) -> String {
    if node.is_missing() {
        format!("expected {}", node.kind())
    } else {
        "invalid syntax".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        let mut parser = PythonParser::new().unwrap();
        let tree = parser.parse("x = 1\n").unwrap();
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn parse_function() {
        let mut parser = PythonParser::new().unwrap();
        let source = "def greet(name):\n    return f\"Hello, {name}!\"\n";
        let tree = parser.parse(source).unwrap();
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn clean_snippet_passes() {
        assert_eq!(check_syntax("def add(a, b):\n    return a + b\n"), Ok(()));
    }

    #[test]
    fn unmatched_paren_reports_line() {
        let err = check_syntax("x = (1 +").unwrap_err();
        match err {
            ParseError::Syntax { line, .. } => assert_eq!(line, 1),
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn syntax_error_display_embeds_line() {
        let err = check_syntax("def f(:").unwrap_err();
        assert!(err.to_string().starts_with("Syntax error at line "));
    }

    #[test]
    fn empty_source_is_valid() {
        assert_eq!(check_syntax(""), Ok(()));
    }
}
