//! Decorators wrap the bare lines a dialect produces with style-specific
//! syntax: import blocks, class attributes or base classes, optional types.
//!
//! Every method hands back a lazy, single-pass line sequence. Decorators
//! compose by ownership: [`OptionalDecorator`] owns its base and only
//! rewrites the property lines the base emits.
use std::borrow::Cow;
use std::iter;

use serde::Serialize;

/// Lazy line sequence produced by a decorator.
pub type Lines<'a> = Box<dyn Iterator<Item = String> + 'a>;

pub trait Decorator {
    /// Lines emitted once per output file, ahead of the classes.
    fn imports(&self) -> Lines<'_>;

    /// Decorate a bare class header line.
    fn class_def(&self, line: String) -> Lines<'_>;

    /// Decorate a bare property line.
    fn property_def(&self, line: String) -> Lines<'_>;

    /// The type a decorated property finally declares for `ty`. Library
    /// imports are computed from these.
    fn field_type<'t>(&self, ty: &'t str) -> Cow<'t, str> { Cow::Borrowed(ty) }
}

/// Rendering style chosen on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Bare declarations (TypeScript interfaces, C# property classes).
    Plain,
    /// Immutable data records (`@dataclass`).
    Dataclass,
    /// Validated models (`pydantic.BaseModel`).
    Pydantic,
}

impl Style {
    pub fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Dataclass => "dataclass",
            Self::Pydantic => "pydantic",
        }
    }
}

/// Build the decorator for `style`, wrapped for optional fields when
/// `optional` names the dialect's optional syntax.
pub fn decorator_for(style: Style, optional: Option<OptionalStyle>) -> Box<dyn Decorator> {
    let base: Box<dyn Decorator> = match style {
        Style::Plain => Box::new(Plain),
        Style::Dataclass => Box::new(Dataclass),
        Style::Pydantic => Box::new(Pydantic),
    };
    match optional {
        Some(optional) => Box::new(OptionalDecorator::new(base, optional)),
        None => base,
    }
}

fn static_lines(lines: &'static [&'static str]) -> Lines<'static> {
    Box::new(lines.iter().map(|line| line.to_string()))
}

// ------------------------------ Variants ---------------------------------- //

/// Leaves every line untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Decorator for Plain {
    fn imports(&self) -> Lines<'_> { Box::new(iter::empty()) }

    fn class_def(&self, line: String) -> Lines<'_> { Box::new(iter::once(line)) }

    fn property_def(&self, line: String) -> Lines<'_> { Box::new(iter::once(line)) }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dataclass;

impl Decorator for Dataclass {
    fn imports(&self) -> Lines<'_> {
        static_lines(&["from dataclasses import dataclass", "", ""])
    }

    fn class_def(&self, line: String) -> Lines<'_> {
        Box::new(iter::once("@dataclass".to_string()).chain(iter::once(line)))
    }

    fn property_def(&self, line: String) -> Lines<'_> { Box::new(iter::once(line)) }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Pydantic;

impl Decorator for Pydantic {
    fn imports(&self) -> Lines<'_> {
        static_lines(&["from pydantic import BaseModel", "", ""])
    }

    /// `class User:` → `class User(BaseModel):`
    fn class_def(&self, line: String) -> Lines<'_> {
        let line = match line.strip_suffix(':') {
            Some(head) => format!("{head}(BaseModel):"),
            None => line,
        };
        Box::new(iter::once(line))
    }

    fn property_def(&self, line: String) -> Lines<'_> { Box::new(iter::once(line)) }
}

/// How a dialect spells "this field may be absent".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalStyle {
    /// `Optional[T]` from Python's `typing`.
    Typing,
    /// `T | null`, keeping a trailing `;`.
    NullUnion,
}

impl OptionalStyle {
    pub fn wrap(self, ty: &str) -> String {
        match self {
            Self::Typing => format!("Optional[{ty}]"),
            Self::NullUnion => match ty.strip_suffix(';') {
                Some(ty) => format!("{ty} | null;"),
                None => format!("{ty} | null"),
            },
        }
    }

    /// Wrap everything after the first `: `; lines without one pass through.
    pub fn wrap_line(self, line: &str) -> String {
        match line.split_once(": ") {
            Some((head, ty)) => format!("{head}: {}", self.wrap(ty)),
            None => line.to_string(),
        }
    }
}

/// Marks every property of the wrapped decorator as optional.
pub struct OptionalDecorator {
    inner: Box<dyn Decorator>,
    style: OptionalStyle,
}

impl OptionalDecorator {
    pub fn new(inner: Box<dyn Decorator>, style: OptionalStyle) -> Self {
        Self { inner, style }
    }
}

impl Decorator for OptionalDecorator {
    fn imports(&self) -> Lines<'_> { self.inner.imports() }

    fn class_def(&self, line: String) -> Lines<'_> { self.inner.class_def(line) }

    fn property_def(&self, line: String) -> Lines<'_> {
        let style = self.style;
        Box::new(self.inner.property_def(line).map(move |line| style.wrap_line(&line)))
    }

    fn field_type<'t>(&self, ty: &'t str) -> Cow<'t, str> {
        Cow::Owned(self.style.wrap(&self.inner.field_type(ty)))
    }
}

// ------------------------------- Tests ------------------------------------ //
