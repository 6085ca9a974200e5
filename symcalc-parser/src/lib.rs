//! Parser for single-variable algebraic expressions such as `7x^3 - sin(x) + 2.5`.
//!
//! The [`parser::parse`] function tokenizes the source with [`tokenizer`], builds a parse tree
//! ([`parser::ast::Expr`]) and detects the one free variable used by the expression. The parse
//! tree keeps the shape of the source text; algebraic cleanup is left to the consumer.

pub mod parser;
pub mod tokenizer;
