//! Schema inference: one depth-first pass over a JSON document that fills a
//! [`TypeModel`] with a class per object it meets.
//!
//! - Objects become classes named after the key that holds them; fields keep
//!   source key order.
//! - Arrays are typed from their first element only. The element is named
//!   after the singular form of the array's own type name (`tags` → `Tag`).
//!   Empty arrays have nothing to sample and fall back to the unknown type.
//! - Scalars map straight to the dialect's primitive spelling.
//!
//! Classes are defined before their fields are inferred, so every class name
//! handed back to a parent already exists in the model. A second object that
//! lands on an existing name replaces the earlier fields (last write wins).
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::error::InferError;
use crate::model::TypeModel;
use crate::naming::{singular_name, NameConverter, ScalarKind};

pub struct SchemaInferencer<'a> {
    names: &'a dyn NameConverter,
}

impl<'a> SchemaInferencer<'a> {
    pub fn new(names: &'a dyn NameConverter) -> Self { Self { names } }

    /// Infer `value` under `name`, registering classes in `model`, and return
    /// the type name assigned to `value`.
    pub fn infer(&self, name: &str, value: &Value, model: &mut TypeModel) -> Result<String, InferError> {
        self.infer_node(name, value, model, "")
    }

    fn infer_node(
        &self,
        name: &str,
        value: &Value,
        model: &mut TypeModel,
        pointer: &str,
    ) -> Result<String, InferError> {
        match value {
            Value::Object(map) => self.infer_object(name, map, model, pointer),
            Value::Array(items) => self.infer_array(name, items, model, pointer),
            scalar => Ok(self.scalar_type(scalar)),
        }
    }

    fn infer_object(
        &self,
        name: &str,
        map: &Map<String, Value>,
        model: &mut TypeModel,
        pointer: &str,
    ) -> Result<String, InferError> {
        let type_name = self.class_name(name, pointer)?;
        if let Some(previous) = model.define_class(&type_name) {
            warn!(
                class = %type_name,
                pointer,
                discarded_fields = previous.len(),
                "class name inferred twice; keeping the latest definition"
            );
        }
        debug!(class = %type_name, pointer, fields = map.len(), "inferring class");

        for (key, value) in map {
            let child = format!("{pointer}/{}", escape_pointer_token(key));
            let mut field_type = self.infer_node(key, value, model, &child)?;
            if field_type.is_empty() {
                field_type = key.clone();
            }
            model.set_field(&type_name, key, field_type);
        }
        Ok(type_name)
    }

    fn infer_array(
        &self,
        name: &str,
        items: &[Value],
        model: &mut TypeModel,
        pointer: &str,
    ) -> Result<String, InferError> {
        let Some(first) = items.first() else {
            trace!(pointer, "empty array; no element to sample");
            return Ok(self.names.unknown_type().to_string());
        };
        // best effort: a separator-only key still yields `Item`
        let element_name = singular_name(&self.names.to_type_name(name));
        if items.len() > 1 {
            trace!(pointer, ignored = items.len() - 1, "sampling the first array element only");
        }

        let element_type = self.infer_node(&element_name, first, model, &format!("{pointer}/0"))?;
        Ok(self.names.list_type_format(&element_type))
    }

    fn scalar_type(&self, value: &Value) -> String {
        match ScalarKind::of(value) {
            Some(kind) => self.names.to_type_name(kind.token()),
            None => self.names.unknown_type().to_string(),
        }
    }

    fn class_name(&self, name: &str, pointer: &str) -> Result<String, InferError> {
        let type_name = self.names.to_type_name(name);
        if type_name.is_empty() {
            return Err(InferError::EmptyName {
                pointer: pointer.to_string(),
                key: name.to_string(),
            });
        }
        Ok(type_name)
    }
}

/// Run a full inference pass from a fresh model.
pub fn infer_model(names: &dyn NameConverter, root_name: &str, value: &Value) -> Result<TypeModel, InferError> {
    let mut model = TypeModel::new();
    let root_type = SchemaInferencer::new(names).infer(root_name, value, &mut model)?;
    debug!(root = %root_type, classes = model.len(), "inference finished");
    Ok(model)
}

// RFC 6901: `~` → `~0`, `/` → `~1`
fn escape_pointer_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

// ------------------------------- Tests ------------------------------------ //
