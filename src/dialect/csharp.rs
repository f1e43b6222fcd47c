//! C#: plain classes with auto-properties.
use super::Dialect;
use crate::decorate::OptionalStyle;
use crate::naming::{NameConverter, ScalarKind};

const COLLECTIONS_NAMESPACE: &str = "System.Collections.Generic";

#[derive(Debug, Clone, Copy, Default)]
pub struct CSharp;

impl NameConverter for CSharp {
    fn primitive(&self, kind: ScalarKind) -> &'static str {
        match kind {
            ScalarKind::String => "string",
            ScalarKind::Integer => "int",
            ScalarKind::Float => "float",
            ScalarKind::Boolean => "bool",
            ScalarKind::Null => self.unknown_type(),
        }
    }

    fn unknown_type(&self) -> &'static str { "object" }

    fn list_type_format(&self, element: &str) -> String { format!("IEnumerable<{element}>") }
}

impl Dialect for CSharp {
    fn names(&self) -> &dyn NameConverter { self }

    fn file_extension(&self) -> &'static str { "cs" }

    fn class_header(&self, class: &str) -> String { format!("public class {class}") }

    fn class_open(&self) -> Option<&'static str> { Some("{") }

    fn class_close(&self) -> Option<&'static str> { Some("}") }

    fn property_line(&self, field: &str, ty: &str) -> String {
        format!("    public {ty} {field} {{ get; set; }}")
    }

    fn typing_imports(&self, types: &[&str]) -> Vec<String> {
        if types.iter().any(|ty| ty.contains("IEnumerable")) {
            vec![format!("using {COLLECTIONS_NAMESPACE};"), String::new()]
        } else {
            Vec::new()
        }
    }

    fn generic_delimiters(&self) -> (char, char) { ('<', '>') }

    // every generated class shares one namespace
    fn class_import(&self, _class: &str, _stem: &str) -> Option<String> { None }

    fn optional_style(&self) -> Option<OptionalStyle> { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_import_only_when_sequences_appear() {
        assert!(CSharp.typing_imports(&["int", "string"]).is_empty());
        assert_eq!(
            CSharp.typing_imports(&["IEnumerable<User>"]),
            ["using System.Collections.Generic;", ""]
        );
    }

    #[test]
    fn layout() {
        assert_eq!(CSharp.class_header("Root"), "public class Root");
        assert_eq!(CSharp.property_line("spell", "string"), "    public string spell { get; set; }");
        assert_eq!(CSharp.class_import("User", "user"), None);
    }
}
