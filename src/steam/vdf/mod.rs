mod lexer;
mod node;

use std::io::{self, Read};

pub use lexer::Lexer;
pub use node::LibraryNode;
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug)]
pub enum VdfError {
    #[error("No closing quotation for string starting on line {line}")]
    UnclosedQuote { line: usize },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

const INDENT: &str = "  ";

fn push_indented(json: &mut String, indent: usize, text: &str) {
    for _ in 0..indent {
        json.push_str(INDENT);
    }
    json.push_str(text);
}

/// Rewrites VDF text as JSON text.
///
/// Tokens are copied through as they are, so quoted VDF strings become JSON strings with their
/// backslashes read as JSON escapes. Every key is followed by a `:` and every value or closing
/// brace by a `,`, unless the next token closes the enclosing object. Nothing is validated here:
/// VDF that doesn't map onto JSON produces text that fails to parse.
///
/// # Errors
///
/// Returns [`VdfError::UnclosedQuote`] if a quoted string never closes.
pub fn vdf_to_json(text: &str) -> Result<String, VdfError> {
    let mut lexer = Lexer::new(text);
    let mut json = String::from("{\n");
    let mut indent = 1_usize;

    while let Some(token) = lexer.next_token()? {
        if token == "}" {
            indent = indent.saturating_sub(1);
            push_indented(&mut json, indent, "}");
            if lexer.peek_token()?.is_some_and(|next| next != "}") {
                json.push(',');
            }
            json.push('\n');
            continue;
        }

        match lexer.next_token()? {
            Some(next) if next == "{" => {
                trace!(key = %token, indent, "Opening object");
                push_indented(&mut json, indent, &format!("{token}: {{\n"));
                indent += 1;
            }
            value => {
                push_indented(
                    &mut json,
                    indent,
                    &format!("{token}: {}", value.unwrap_or_default()),
                );
                if lexer.peek_token()? != Some("}") {
                    json.push(',');
                }
                json.push('\n');
            }
        }
    }

    json.push_str("}\n");
    Ok(json)
}

/// Reads all of `reader` as VDF and returns it as JSON text.
///
/// # Errors
///
/// Returns [`VdfError::Io`] if the reader fails or isn't UTF-8, otherwise the same errors as
/// [`vdf_to_json`].
pub fn read_vdf_to_json<R: Read>(mut reader: R) -> Result<String, VdfError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    vdf_to_json(&text)
}

/// Converts VDF text and parses the result into a [`LibraryNode`] tree.
///
/// # Errors
///
/// Returns [`VdfError::UnclosedQuote`] if a quoted string never closes and [`VdfError::Json`] if
/// the converted text is not valid JSON.
pub fn parse(text: &str) -> Result<LibraryNode, VdfError> {
    let json = vdf_to_json(text)?;
    serde_json::from_str(&json).map_err(VdfError::from)
}
