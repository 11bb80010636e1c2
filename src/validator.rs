use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use miette::{Diagnostic, SourceSpan};
use serde_json::error::Category;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ValidationError {
    #[error("file '{}' does not exist", .0.display())]
    #[diagnostic(code(pyrite::not_found))]
    NotFound(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    #[diagnostic(code(pyrite::not_a_directory))]
    NotADirectory(PathBuf),
    #[error("file '{}' is empty", .0.display())]
    #[diagnostic(code(pyrite::empty_file))]
    Empty(PathBuf),
    #[error("file is not valid UTF-8 encoded")]
    #[diagnostic(code(pyrite::encoding))]
    Encoding(PathBuf),
    #[error("invalid JSON syntax - {reason}")]
    #[diagnostic(code(pyrite::syntax_error))]
    Syntax {
        line: usize,
        column: usize,
        reason: String,
        #[source_code]
        src: String,
        #[label("error here")]
        span: SourceSpan,
    },
    #[error("unexpected end of file - {reason}")]
    #[diagnostic(code(pyrite::unexpected_eof))]
    UnexpectedEof {
        line: usize,
        column: usize,
        reason: String,
        #[source_code]
        src: String,
        #[label("file ended here")]
        span: SourceSpan,
    },
    #[error("JSON root must be an object or array, found {0}")]
    #[diagnostic(code(pyrite::root_type))]
    InvalidRootType(&'static str),
    #[error("'{}' is not a .json file", .0.display())]
    #[diagnostic(code(pyrite::wrong_extension))]
    WrongExtension(PathBuf),
    #[error("unexpected error - {0}")]
    #[diagnostic(code(pyrite::unexpected))]
    Unexpected(#[from] io::Error),
}

impl ValidationError {
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            ValidationError::Syntax { .. } | ValidationError::UnexpectedEof { .. }
        )
    }
}

/// Root-type policy. `Lenient` accepts any well-formed JSON root; `Strict`
/// rejects documents whose root is not an object or array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    #[default]
    Lenient,
    Strict,
}

/// Outcome of decoding and classifying one document. `EmptyButValid` marks a
/// well-formed `{}` or `[]` root and still counts as valid.
#[derive(Debug)]
pub enum Verdict {
    Valid,
    EmptyButValid,
    Invalid(ValidationError),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Verdict::Invalid(_))
    }
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub verdict: Verdict,
}

pub fn validate_file(path: &Path, strictness: Strictness) -> FileReport {
    let verdict = match read_document(path) {
        Ok(value) => classify_root(&value, strictness),
        Err(err) => Verdict::Invalid(err),
    };
    FileReport {
        path: path.to_path_buf(),
        verdict,
    }
}

/// Read a file and decode it as JSON, reporting which step failed. Used both
/// for validation and for re-reading an already-validated file to display it.
pub fn read_document(path: &Path) -> Result<Value, ValidationError> {
    if !path.is_file() {
        return Err(ValidationError::NotFound(path.to_path_buf()));
    }
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ValidationError::NotFound(path.to_path_buf()))
        }
        Err(err) => return Err(ValidationError::Unexpected(err)),
    };
    if bytes.is_empty() {
        return Err(ValidationError::Empty(path.to_path_buf()));
    }
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(_) => return Err(ValidationError::Encoding(path.to_path_buf())),
    };
    serde_json::from_str(&content).map_err(|err| classify_decode_error(&content, &err))
}

pub fn classify_document(content: &str, strictness: Strictness) -> Verdict {
    match serde_json::from_str::<Value>(content) {
        Ok(value) => classify_root(&value, strictness),
        Err(err) => Verdict::Invalid(classify_decode_error(content, &err)),
    }
}

fn classify_root(value: &Value, strictness: Strictness) -> Verdict {
    let empty = match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        other => {
            return match strictness {
                Strictness::Strict => {
                    Verdict::Invalid(ValidationError::InvalidRootType(root_type_name(other)))
                }
                Strictness::Lenient => Verdict::Valid,
            }
        }
    };
    if empty {
        Verdict::EmptyButValid
    } else {
        Verdict::Valid
    }
}

fn root_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn classify_decode_error(content: &str, err: &serde_json::Error) -> ValidationError {
    let (line, column) = (err.line(), err.column());
    let span = SourceSpan::new(offset_at(content, line, column).into(), 1);
    let src = content.to_owned();
    let reason = err.to_string();
    if err.classify() == Category::Eof {
        ValidationError::UnexpectedEof {
            line,
            column,
            reason,
            src,
            span,
        }
    } else {
        ValidationError::Syntax {
            line,
            column,
            reason,
            src,
            span,
        }
    }
}

// serde_json reports 1-based line/column; miette wants a byte offset.
fn offset_at(content: &str, line: usize, column: usize) -> usize {
    let mut offset = 0usize;
    for (idx, text) in content.lines().enumerate() {
        if idx + 1 == line {
            offset += byte_index(text, column);
            break;
        }
        offset += text.len() + 1;
    }
    offset
}

fn byte_index(text: &str, column: usize) -> usize {
    if column == 0 {
        return 0;
    }
    text.char_indices()
        .map(|(i, _)| i)
        .nth(column - 1)
        .unwrap_or(text.len())
}
