//! Post-parse adapter: sort-key remapping and default substitution.
//!
//! The parser reports an absent clause as `None`. A [`Translator`] turns a
//! query into a pair of documents that are always present, renaming
//! `ORDER BY` keys on the way.
//!
//! Defaults are shared through [`Arc`]. When a clause is absent the
//! translator hands back a clone of the very same `Arc`, so callers can
//! tell a default apart from an equal-looking parsed clause with
//! [`Arc::ptr_eq`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use dql_lang::Translator;
//! use serde_json::json;
//!
//! let default_sort = Arc::new(json!({"created": -1}));
//! let translator = Translator::default()
//!     .with_sort_mapping("name", "profile.name")
//!     .with_default_order_by(Arc::clone(&default_sort));
//!
//! let translation = translator.translate(Some("active=true")).unwrap();
//! assert!(Arc::ptr_eq(&translation.order_by, &default_sort));
//!
//! let translation = translator.translate(Some("ORDER BY name DESC")).unwrap();
//! assert_eq!(*translation.order_by, json!({"profile.name": -1}));
//! assert_eq!(*translation.where_clause, json!({}));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::ast::Operator;
use crate::config::TranslatorConfig;
use crate::error::Result;
use crate::hook::{Operand, RenameHook};
use crate::parser::Parser;

/// Output of [`Translator::translate`]; both clauses are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub where_clause: Arc<Value>,
    pub order_by: Arc<Value>,
}

impl Translation {
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("where".to_string(), (*self.where_clause).clone());
        map.insert("orderBy".to_string(), (*self.order_by).clone());
        Value::Object(map)
    }
}

#[derive(Debug)]
pub struct Translator {
    parser: Parser,
    sort_mappings: HashMap<String, String>,
    default_where: Arc<Value>,
    default_order_by: Arc<Value>,
}

impl Default for Translator {
    fn default() -> Self {
        Translator {
            parser: Parser::new(),
            sort_mappings: HashMap::new(),
            default_where: Arc::new(Value::Object(Map::new())),
            default_order_by: Arc::new(Value::Object(Map::new())),
        }
    }
}

impl Translator {
    /// Build a translator from configuration.
    ///
    /// Non-empty `condition_mappings` install a [`RenameHook`] on the inner
    /// parser; a hook set later with [`Translator::with_hook`] replaces it.
    pub fn new(config: TranslatorConfig) -> Self {
        let mut translator = Translator {
            sort_mappings: config.sort_mappings,
            ..Translator::default()
        };

        if !config.condition_mappings.is_empty() {
            translator
                .parser
                .set_condition_hook(RenameHook::new(config.condition_mappings));
        }
        if let Some(default_where) = config.defaults.where_clause {
            translator.default_where = Arc::new(default_where);
        }
        if let Some(default_order_by) = config.defaults.order_by {
            translator.default_order_by = Arc::new(default_order_by);
        }
        translator
    }

    /// Use `parser`, and whatever hook it carries, for parsing.
    pub fn with_parser(mut self, parser: Parser) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, Operator, Operand<'_>) -> Option<Value> + Send + Sync + 'static,
    {
        self.parser.set_hook(hook);
        self
    }

    pub fn with_sort_mapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.sort_mappings.insert(from.into(), to.into());
        self
    }

    pub fn with_default_where(mut self, default_where: Arc<Value>) -> Self {
        self.default_where = default_where;
        self
    }

    pub fn with_default_order_by(mut self, default_order_by: Arc<Value>) -> Self {
        self.default_order_by = default_order_by;
        self
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn default_where(&self) -> &Arc<Value> {
        &self.default_where
    }

    pub fn default_order_by(&self) -> &Arc<Value> {
        &self.default_order_by
    }

    /// Parse `input` and fill in absent clauses.
    ///
    /// `None` is read as the empty string.
    pub fn translate(&self, input: Option<&str>) -> Result<Translation> {
        let document = self.parser.parse(input.unwrap_or_default())?;

        let where_clause = match document.where_clause {
            Some(condition) => Arc::new(condition),
            None => {
                tracing::trace!("using default where clause");
                Arc::clone(&self.default_where)
            }
        };

        let order_by = match document.order_by {
            Some(sort) => Arc::new(self.remap_sort(sort)),
            None => {
                tracing::trace!("using default order by");
                Arc::clone(&self.default_order_by)
            }
        };

        Ok(Translation {
            where_clause,
            order_by,
        })
    }

    fn remap_sort(&self, sort: Value) -> Value {
        if self.sort_mappings.is_empty() {
            return sort;
        }

        match sort {
            Value::Object(entries) => {
                let mut mapped = Map::new();
                for (identifier, direction) in entries {
                    let key = self
                        .sort_mappings
                        .get(&identifier)
                        .cloned()
                        .unwrap_or(identifier);
                    mapped.insert(key, direction);
                }
                Value::Object(mapped)
            }
            other => other,
        }
    }
}
