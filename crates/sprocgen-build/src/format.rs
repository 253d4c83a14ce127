//! Column-level SQL fragments shared by the procedure templates.
//!
//! Multi-line fragments never start with indentation; the caller places the
//! first line and `indent` is applied to every continuation line.

use sprocgen_schema::ColumnDescriptor;

/// One parameter per line, comma-terminated except the last.
///
/// With `with_types` each entry is `@<name> <type>`, and nullable columns get
/// a `= NULL` default. Without types each entry is the bare `@<name>`
/// reference used in VALUES lists. Every line, including the first, carries
/// `indent`.
#[must_use]
pub fn params_list(columns: &[&ColumnDescriptor], indent: &str, with_types: bool) -> String {
    columns
        .iter()
        .map(|column| {
            if !with_types {
                format!("{indent}@{}", column.name)
            } else if column.is_nullable {
                format!("{indent}@{} {} = NULL", column.name, column.sql_type)
            } else {
                format!("{indent}@{} {}", column.name, column.sql_type)
            }
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

/// `[a]` / `, [b]` projection list.
#[must_use]
pub fn column_list(columns: &[&ColumnDescriptor], indent: &str) -> String {
    join_leading(columns.iter().map(|c| format!("[{}]", c.name)), indent, ", ")
}

/// `[a] = @a` / `, [b] = @b` assignments for an UPDATE.
#[must_use]
pub fn set_list(columns: &[&ColumnDescriptor], indent: &str) -> String {
    join_leading(columns.iter().map(|c| assignment(c)), indent, ", ")
}

/// Equality conjunction over `columns`; never a disjunction.
#[must_use]
pub fn where_clause(columns: &[&ColumnDescriptor], indent: &str) -> String {
    join_leading(columns.iter().map(|c| assignment(c)), indent, "AND ")
}

fn assignment(column: &ColumnDescriptor) -> String {
    format!("[{name}] = @{name}", name = column.name)
}

// join_leading
// separator leads each continuation line: "a\n<indent><sep>b"
fn join_leading(items: impl Iterator<Item = String>, indent: &str, separator: &str) -> String {
    items
        .collect::<Vec<_>>()
        .join(&format!("\n{indent}{separator}"))
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("OrderId", "int").primary_key(),
            ColumnDescriptor::new("Note", "nvarchar(MAX)").nullable(),
            ColumnDescriptor::new("Price", "decimal(10,2)"),
        ]
    }

    #[test]
    fn typed_params_mark_nullable_defaults() {
        let columns = columns();
        let refs: Vec<_> = columns.iter().collect();

        assert_eq!(
            params_list(&refs, "    ", true),
            "    @OrderId int,\n    @Note nvarchar(MAX) = NULL,\n    @Price decimal(10,2)"
        );
    }

    #[test]
    fn untyped_params_never_carry_defaults() {
        let columns = columns();
        let refs: Vec<_> = columns.iter().collect();

        assert_eq!(
            params_list(&refs, "  ", false),
            "  @OrderId,\n  @Note,\n  @Price"
        );
    }

    #[test]
    fn empty_params_render_nothing() {
        assert_eq!(params_list(&[], "    ", true), "");
    }

    #[test]
    fn column_list_leads_with_comma() {
        let columns = columns();
        let refs: Vec<_> = columns.iter().collect();

        assert_eq!(
            column_list(&refs, "    "),
            "[OrderId]\n    , [Note]\n    , [Price]"
        );
    }

    #[test]
    fn set_list_assigns_each_parameter() {
        let columns = columns();
        let refs: Vec<_> = columns[1..].iter().collect();

        assert_eq!(
            set_list(&refs, "\t"),
            "[Note] = @Note\n\t, [Price] = @Price"
        );
    }

    #[test]
    fn where_clause_is_a_conjunction() {
        let key = [
            ColumnDescriptor::new("OrderId", "int").primary_key(),
            ColumnDescriptor::new("LineNo", "int").primary_key(),
        ];
        let refs: Vec<_> = key.iter().collect();

        assert_eq!(
            where_clause(&refs, "        "),
            "[OrderId] = @OrderId\n        AND [LineNo] = @LineNo"
        );
    }

    #[test]
    fn single_entry_has_no_separator() {
        let column = ColumnDescriptor::new("Id", "int");

        assert_eq!(where_clause(&[&column], "    "), "[Id] = @Id");
        assert_eq!(column_list(&[&column], "    "), "[Id]");
    }
}
