//! Python snippet parsing

mod python;

pub use python::{check_syntax, ParseError, PythonParser};
