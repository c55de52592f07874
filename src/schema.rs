use tantivy::schema::{Field, Schema, STORED, STRING};

/// Name of the single field holding the canonical file path.
pub const FILEPATH: &str = "filepath";

/// Builds the Tantivy schema for the path index.
///
/// Fields:
/// - `filepath`: canonical absolute path, untokenized (one case-sensitive
///   term per path) and stored so hits can print it verbatim
pub fn build_schema() -> Schema {
    let mut builder = Schema::builder();
    builder.add_text_field(FILEPATH, STRING | STORED);
    builder.build()
}

/// Returns the `filepath` field handle.
pub fn filepath_field(schema: &Schema) -> Field {
    schema
        .get_field(FILEPATH)
        .expect("schema missing 'filepath' field")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_one_field() {
        let schema = build_schema();
        let fields: Vec<_> = schema.fields().collect();
        assert_eq!(fields.len(), 1, "schema should have exactly 1 field");
    }

    #[test]
    fn filepath_is_stored_and_untokenized() {
        let schema = build_schema();
        let field = filepath_field(&schema);
        let entry = schema.get_field_entry(field);

        assert_eq!(entry.name(), FILEPATH);
        assert!(entry.is_stored(), "filepath must be retrievable");
        assert!(entry.is_indexed(), "filepath must be searchable");

        let options = match entry.field_type() {
            tantivy::schema::FieldType::Str(options) => options,
            other => panic!("expected a text field, got {:?}", other),
        };
        let indexing = options
            .get_indexing_options()
            .expect("filepath should be indexed");
        assert_eq!(indexing.tokenizer(), "raw");
    }
}
