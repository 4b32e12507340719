//! # DQL - Abstract Syntax Tree
//!
//! This module defines the typed representation of a DQL query: a boolean
//! filter over dotted identifiers plus an optional sort clause.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Comparison operators and connectives
//! - **[condition]** - Where-clause tree and the reduction rules that build it
//! - **[query]** - Complete query and sort specification
//!
//! ## Quick Start
//!
//! ```text
//! status='open' AND (priority > 2 OR owner IN ('ana', 'li')) ORDER BY created DESC
//! ```
//!
//! ## Core Concepts
//!
//! ### Precedence
//!
//! From loosest to tightest binding: `OR`, `AND`, a single comparison or
//! membership test, a parenthesized group.
//!
//! ### Flattening
//!
//! Runs of one connective become a single n-ary node. `a=1 AND b=2 AND c=3`
//! is one `And` with three children, and a group holding only one condition
//! is that condition itself.
//!
//! ### Right-hand sides
//!
//! The right-hand side of a comparison or membership test is always a literal
//! (string, number, boolean, null). Comparing two identifiers is a syntax
//! error.
pub mod condition;
pub mod operators;
pub mod query;
pub mod tokens;

pub use condition::Condition;
pub use operators::{CompareOp, Connective, Operator};
pub use query::{Direction, Query, SortItem, SortSpec};
pub use tokens::Token;
