//! Required-field checks on raw table documents.
//!
//! Checks run on `serde_json::Value` before typed decoding, so a drifting
//! upstream schema fails with the table, record and field at fault instead
//! of a bare decode error. List fields are normalized in place as they are
//! checked.

use arkdata_core::{SchemaError, normalize, normalize_field};
use serde_json::{Map, Value};

/// Record id used for checks on a document's top level.
const ROOT: &str = "<root>";

/// The document itself as a map of records.
pub(crate) fn records<'a>(
    table: &str,
    doc: &'a mut Value,
) -> Result<&'a mut Map<String, Value>, SchemaError> {
    doc.as_object_mut()
        .ok_or_else(|| SchemaError::invalid(table, ROOT, ROOT, "an object"))
}

/// The top-level object `field` of a document.
pub(crate) fn section<'a>(
    table: &str,
    doc: &'a mut Value,
    field: &str,
) -> Result<&'a mut Map<String, Value>, SchemaError> {
    let root = records(table, doc)?;
    match root.get_mut(field) {
        None | Some(Value::Null) => Err(SchemaError::missing(table, ROOT, field)),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(SchemaError::invalid(table, ROOT, field, "an object")),
    }
}

/// A record that is itself a list, normalized in place.
pub(crate) fn list<'a>(
    table: &str,
    id: &str,
    value: &'a mut Value,
) -> Result<&'a mut Vec<Value>, SchemaError> {
    if value.is_null() {
        return Err(SchemaError::missing(table, id, "<record>"));
    }
    if !value.is_array() {
        let items =
            normalize(value.take()).map_err(|e| SchemaError::shape(table, id, "<record>", e))?;
        *value = Value::Array(items);
    }
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(SchemaError::invalid(table, id, "<record>", "an array")),
    }
}

/// One record under validation. Nested records share the id of the record
/// they belong to and report fields with a path prefix (`phases[0].maxLevel`).
pub(crate) struct Record<'a> {
    table: &'a str,
    id: &'a str,
    prefix: String,
    fields: &'a mut Map<String, Value>,
}

impl<'a> Record<'a> {
    pub(crate) fn new(
        table: &'a str,
        id: &'a str,
        value: &'a mut Value,
    ) -> Result<Self, SchemaError> {
        Self::at(table, id, String::new(), value)
    }

    fn at(
        table: &'a str,
        id: &'a str,
        prefix: String,
        value: &'a mut Value,
    ) -> Result<Self, SchemaError> {
        let label = match prefix.strip_suffix('.') {
            Some(path) => path.to_string(),
            None => "<record>".to_string(),
        };
        match value {
            Value::Object(fields) => Ok(Self {
                table,
                id,
                prefix,
                fields,
            }),
            _ => Err(SchemaError::invalid(table, id, label, "an object")),
        }
    }

    fn field_name(&self, field: &str) -> String {
        format!("{}{field}", self.prefix)
    }

    fn missing(&self, field: &str) -> SchemaError {
        SchemaError::missing(self.table, self.id, self.field_name(field))
    }

    fn invalid(&self, field: &str, expected: &'static str) -> SchemaError {
        SchemaError::invalid(self.table, self.id, self.field_name(field), expected)
    }

    /// Present and not `null`.
    pub(crate) fn present(&self, field: &str) -> Result<&Value, SchemaError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Err(self.missing(field)),
            Some(value) => Ok(value),
        }
    }

    /// A string, possibly empty.
    pub(crate) fn string(&self, field: &str) -> Result<&str, SchemaError> {
        self.present(field)?
            .as_str()
            .ok_or_else(|| self.invalid(field, "a string"))
    }

    pub(crate) fn non_empty_str(&self, field: &str) -> Result<&str, SchemaError> {
        let value = self.string(field)?;
        if value.is_empty() {
            return Err(self.invalid(field, "a non-empty string"));
        }
        Ok(value)
    }

    pub(crate) fn number(&self, field: &str) -> Result<(), SchemaError> {
        if self.present(field)?.is_number() {
            Ok(())
        } else {
            Err(self.invalid(field, "a number"))
        }
    }

    /// Normalize `field` if it is set. Missing and `null` are accepted.
    pub(crate) fn optional_array(&mut self, field: &str) -> Result<(), SchemaError> {
        normalize_field(self.fields, field)
            .map_err(|e| SchemaError::shape(self.table, self.id, self.field_name(field), e))
    }

    /// An array, once normalized.
    pub(crate) fn array(&mut self, field: &str) -> Result<&mut Vec<Value>, SchemaError> {
        if let Err(e) = normalize_field(self.fields, field) {
            return Err(SchemaError::shape(
                self.table,
                self.id,
                self.field_name(field),
                e,
            ));
        }
        let missing = self.missing(field);
        match self.fields.get_mut(field) {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(missing),
        }
    }

    /// Normalize `field` to an array and run `check` on every element.
    pub(crate) fn each(
        &mut self,
        field: &str,
        mut check: impl FnMut(&mut Record<'_>) -> Result<(), SchemaError>,
    ) -> Result<(), SchemaError> {
        let (table, id) = (self.table, self.id);
        let path = self.field_name(field);
        for (i, element) in self.array(field)?.iter_mut().enumerate() {
            let mut record = Record::at(table, id, format!("{path}[{i}]."), element)?;
            check(&mut record)?;
        }
        Ok(())
    }

    /// Normalize `field` to a non-empty array and run `check` on its first element.
    pub(crate) fn first(
        &mut self,
        field: &str,
        check: impl FnOnce(&mut Record<'_>) -> Result<(), SchemaError>,
    ) -> Result<(), SchemaError> {
        let (table, id) = (self.table, self.id);
        let path = self.field_name(field);
        let empty = self.invalid(field, "a non-empty array");
        let first = self.array(field)?.first_mut().ok_or(empty)?;
        let mut record = Record::at(table, id, format!("{path}[0]."), first)?;
        check(&mut record)
    }
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
