//! Table object and type alias generation.

use super::types::TypeRenderer;
use super::{INDENT, property_key, to_identifier};
use pgtypebox_schema::CasingPolicy;
use pgtypebox_schema::ir::TableDeclaration;

/// Generator for `Type.Object` declarations and their `Static` aliases.
pub struct ObjectGenerator<'a> {
    tables: &'a [TableDeclaration],
    renderer: TypeRenderer,
}

impl<'a> ObjectGenerator<'a> {
    /// Creates a new object generator.
    #[must_use]
    pub fn new(tables: &'a [TableDeclaration], casing: CasingPolicy) -> Self {
        Self {
            tables,
            renderer: TypeRenderer::new(casing),
        }
    }

    /// Generates one block per table, in declaration order.
    #[must_use]
    pub fn generate(&self) -> Vec<String> {
        self.tables
            .iter()
            .map(|table| self.generate_table(table))
            .collect()
    }

    /// Generates the object declaration followed by its alias.
    fn generate_table(&self, table: &TableDeclaration) -> String {
        let mut output = String::new();
        let name = to_identifier(&table.emitted_name);
        let alias = to_identifier(&table.alias_name);

        if table.fields.is_empty() {
            output.push_str(&format!("export const {} = Type.Object({{}})\n", name));
        } else {
            output.push_str(&format!("export const {} = Type.Object({{\n", name));
            for field in &table.fields {
                output.push_str(&format!(
                    "{}{}: {},\n",
                    INDENT,
                    property_key(&field.emitted_name),
                    self.renderer.render(&field.ty)
                ));
            }
            output.push_str("})\n");
        }

        output.push('\n');
        output.push_str(&format!(
            "export type {} = Static<typeof {}>\n",
            alias, name
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgtypebox_schema::ir::SemanticType;

    #[test]
    fn test_generate_table() {
        let mut table = TableDeclaration::new("users", CasingPolicy::Verbatim);
        table.push_field("id", SemanticType::number(), CasingPolicy::Verbatim);
        table.push_field(
            "name",
            SemanticType::string().optional(),
            CasingPolicy::Verbatim,
        );

        let tables = vec![table];
        let blocks = ObjectGenerator::new(&tables, CasingPolicy::Verbatim).generate();

        assert_eq!(
            blocks[0],
            "export const users = Type.Object({\n    \
             id: Type.Number(),\n    \
             name: Type.Optional(Type.String()),\n\
             })\n\n\
             export type usersType = Static<typeof users>\n"
        );
    }

    #[test]
    fn test_generate_empty_table() {
        let tables = vec![TableDeclaration::new("audit_log", CasingPolicy::Pascal)];
        let blocks = ObjectGenerator::new(&tables, CasingPolicy::Pascal).generate();

        assert!(blocks[0].starts_with("export const AuditLog = Type.Object({})\n"));
        assert!(blocks[0].ends_with("export type AuditLogType = Static<typeof AuditLog>\n"));
    }

    #[test]
    fn test_generate_quotes_field_names() {
        let mut table = TableDeclaration::new("people", CasingPolicy::Verbatim);
        table.push_field("first name", SemanticType::string(), CasingPolicy::Verbatim);

        let tables = vec![table];
        let blocks = ObjectGenerator::new(&tables, CasingPolicy::Verbatim).generate();
        assert!(blocks[0].contains("    'first name': Type.String(),\n"));
    }

    #[test]
    fn test_generate_renames_reserved_table_names() {
        let tables = vec![
            TableDeclaration::new("default", CasingPolicy::Verbatim),
            TableDeclaration::new("Type", CasingPolicy::Verbatim),
        ];
        let blocks = ObjectGenerator::new(&tables, CasingPolicy::Verbatim).generate();

        assert!(blocks[0].starts_with("export const default_ = Type.Object({})\n"));
        assert!(blocks[0].ends_with("export type defaultType = Static<typeof default_>\n"));
        assert!(blocks[1].starts_with("export const Type_ = Type.Object({})\n"));
    }

    #[test]
    fn test_generate_reserved_enum_reference_matches_declaration() {
        let mut table = TableDeclaration::new("t", CasingPolicy::Verbatim);
        table.push_field(
            "kind",
            SemanticType::EnumRef("enum".to_string()),
            CasingPolicy::Verbatim,
        );

        let tables = vec![table];
        let blocks = ObjectGenerator::new(&tables, CasingPolicy::Verbatim).generate();
        assert!(blocks[0].contains("    kind: Type.Enum(enum_),\n"));
    }

    #[test]
    fn test_generate_sanitizes_table_names() {
        let tables = vec![TableDeclaration::new("user-sessions", CasingPolicy::Verbatim)];
        let blocks = ObjectGenerator::new(&tables, CasingPolicy::Verbatim).generate();

        assert!(blocks[0].contains("export const user_sessions = "));
        assert!(blocks[0].contains("export type user_sessionsType = Static<typeof user_sessions>"));
    }
}
