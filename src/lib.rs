#![allow(clippy::module_inception)]

use std::{fs, io, path::Path, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorTip},
    parser::parser::{parse, ParseResult},
};

pub mod ast;
pub mod errors;
pub mod macros;
pub mod parser;
pub mod tokenizer;

extern crate regex;

/// A line in a named source file. Lines start at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

/// One source file: a shared name used in diagnostics plus the full text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: Rc<String>,
    pub content: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        SourceFile {
            name: Rc::new(name.into()),
            content: content.into(),
        }
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Ok(SourceFile::new(name, content))
    }
}

/// Tokenizes and parses `file` in one pass.
pub fn parse_source(file: &SourceFile) -> ParseResult {
    parse(file)
}

/// Returns the text of the 1-based `line` of `content`, without its line break.
pub fn get_line(content: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    content
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line() {
        let content = "Hello, world!\r\nsecond\n\n    Testing { }\n";

        assert_eq!(super::get_line(content, 1), Some("Hello, world!"));
        assert_eq!(super::get_line(content, 2), Some("second"));
        assert_eq!(super::get_line(content, 3), Some(""));
        assert_eq!(super::get_line(content, 4), Some("    Testing { }"));
        assert_eq!(super::get_line(content, 0), None);
        assert_eq!(super::get_line(content, 9), None);
    }

    #[test]
    fn test_render_error_includes_source_line() {
        let file = super::SourceFile::new("main.viper", "let a: i32 = 1;\nlet b: i32 = @;\n");
        let result = super::parse_source(&file);
        let rendered = super::render_error(&result.errors[0], &file);

        assert!(rendered.starts_with("Error: IllegalCharacter"));
        assert!(rendered.contains("-> main.viper"));
        assert!(rendered.contains("2 | let b: i32 = @;"));
    }
}

/// Formats a diagnostic together with the source line it points at.
pub fn render_error(error: &Error, file: &SourceFile) -> String {
    /*
        Error: UnexpectedToken (did you miss a semicolon?)
        -> main.viper
           |
        20 | let a: i32 = 5
           |
    */

    let line = error.get_line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();
    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", file.name));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    if let Some(text) = get_line(&file.content, line) {
        rendered.push_str(&format!("{} | {}\n", line_string, text.trim()));
    }

    rendered.push_str(&format!("{:>padding$} {}\n", "|", error.get_kind()));
    rendered
}

pub fn display_error(error: &Error, file: &SourceFile) {
    eprint!("{}", render_error(error, file));
}
