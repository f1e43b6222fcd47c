//! Python: `@dataclass`/pydantic classes with `typing` annotations.
use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::Dialect;
use crate::decorate::OptionalStyle;
use crate::naming::{NameConverter, ScalarKind};

// generic constructors (`List[`) and the bare unknown type
static TYPING_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([A-Za-z_]\w*)\[|\b(Any)\b").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct Python;

impl NameConverter for Python {
    fn primitive(&self, kind: ScalarKind) -> &'static str {
        match kind {
            ScalarKind::String => "str",
            ScalarKind::Integer => "int",
            ScalarKind::Float => "float",
            ScalarKind::Boolean => "bool",
            ScalarKind::Null => self.unknown_type(),
        }
    }

    fn unknown_type(&self) -> &'static str { "Any" }

    fn list_type_format(&self, element: &str) -> String { format!("List[{element}]") }
}

impl Dialect for Python {
    fn names(&self) -> &dyn NameConverter { self }

    fn file_extension(&self) -> &'static str { "py" }

    fn class_header(&self, class: &str) -> String { format!("class {class}:") }

    fn property_line(&self, field: &str, ty: &str) -> String { format!("    {field}: {ty}") }

    fn class_spacing(&self) -> usize { 2 }

    fn typing_imports(&self, types: &[&str]) -> Vec<String> {
        let names: BTreeSet<&str> = types
            .iter()
            .flat_map(|ty| TYPING_NAME.captures_iter(ty))
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str())
            .collect();
        if names.is_empty() {
            return Vec::new();
        }
        let names: Vec<&str> = names.into_iter().collect();
        vec![format!("from typing import {}", names.join(", "))]
    }

    fn generic_delimiters(&self) -> (char, char) { ('[', ']') }

    fn class_import(&self, class: &str, stem: &str) -> Option<String> {
        Some(format!("from .{stem} import {class}"))
    }

    fn optional_style(&self) -> Option<OptionalStyle> { Some(OptionalStyle::Typing) }
}
