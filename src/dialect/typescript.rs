//! TypeScript: exported interfaces, one `import { .. }` per referenced class.
use super::Dialect;
use crate::decorate::OptionalStyle;
use crate::naming::{NameConverter, ScalarKind};

#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScript;

impl NameConverter for TypeScript {
    fn primitive(&self, kind: ScalarKind) -> &'static str {
        match kind {
            ScalarKind::String => "string",
            ScalarKind::Integer | ScalarKind::Float => "number",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Null => self.unknown_type(),
        }
    }

    fn unknown_type(&self) -> &'static str { "object" }

    fn list_type_format(&self, element: &str) -> String { format!("Array<{element}>") }
}

impl Dialect for TypeScript {
    fn names(&self) -> &dyn NameConverter { self }

    fn file_extension(&self) -> &'static str { "ts" }

    fn class_header(&self, class: &str) -> String { format!("export interface {class} {{") }

    fn class_close(&self) -> Option<&'static str> { Some("}") }

    fn property_line(&self, field: &str, ty: &str) -> String { format!("    {field}: {ty};") }

    fn typing_imports(&self, _types: &[&str]) -> Vec<String> { Vec::new() }

    fn generic_delimiters(&self) -> (char, char) { ('<', '>') }

    fn class_import(&self, class: &str, stem: &str) -> Option<String> {
        Some(format!("import {{ {class} }} from './{stem}';"))
    }

    fn blank_after_class_imports(&self) -> bool { true }

    fn optional_style(&self) -> Option<OptionalStyle> { Some(OptionalStyle::NullUnion) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        assert_eq!(TypeScript.class_header("Root"), "export interface Root {");
        assert_eq!(TypeScript.property_line("tags", "Array<string>"), "    tags: Array<string>;");
        assert_eq!(
            TypeScript.class_import("User", "user").as_deref(),
            Some("import { User } from './user';")
        );
        assert!(TypeScript.typing_imports(&["Array<object>"]).is_empty());
    }
}
