use sprocgen_schema::ColumnDescriptor;
use std::fmt::{self, Display};
use time::Date;

const RULE: &str = "*******************************************************************************";
const INITIAL_VERSION: &str = "Initial version.";

///
/// Header
///
/// Documentation block placed above each `CREATE PROCEDURE`. One parameter
/// row is rendered per procedure parameter, so it must be built from the
/// same column list as the signature.
///

#[derive(Clone, Debug)]
pub struct Header<'a> {
    pub description: &'a str,
    pub author: &'a str,
    pub creation_date: Date,
    pub parameters: &'a [&'a ColumnDescriptor],
    pub returns: &'a str,
}

impl Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.creation_date.to_string();

        writeln!(f, "/{RULE}")?;
        writeln!(f, "-- Description: {}", self.description)?;
        writeln!(f, "-- Author:      {}", self.author)?;
        writeln!(f, "-- Created:     {date}")?;
        writeln!(f, "--")?;

        if self.parameters.is_empty() {
            writeln!(f, "-- Parameters: N/A")?;
        } else {
            writeln!(f, "-- Parameters:")?;
            for param in self.parameters {
                writeln!(f, "--   @{}: [Parameter description]", param.name)?;
            }
        }

        writeln!(f, "--")?;
        writeln!(f, "-- Returns:")?;
        writeln!(f, "--   {}", self.returns)?;
        writeln!(f, "--")?;
        writeln!(f, "-- Modification History:")?;
        writeln!(f, "--   {:<12}{:<13}Description", "Date", "Author")?;
        writeln!(f, "--   {:<12}{:<13}{}", "----------", "-----------", "-".repeat(43))?;
        writeln!(f, "--   {date:<12}{:<13}{INITIAL_VERSION}", self.author)?;
        write!(f, "{RULE}/")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn lists_one_row_per_parameter() {
        let id = ColumnDescriptor::new("Id", "int");
        let name = ColumnDescriptor::new("Name", "varchar(50)");
        let params = [&id, &name];

        let header = Header {
            description: "Updates a record.",
            author: "ops",
            creation_date: date!(2024 - 03 - 09),
            parameters: &params,
            returns: "Nothing.",
        }
        .to_string();

        assert!(header.starts_with("/*****"));
        assert!(header.ends_with("*****/"));
        assert!(header.contains("-- Created:     2024-03-09\n"));
        assert!(header.contains("--   @Id: [Parameter description]\n"));
        assert!(header.contains("--   @Name: [Parameter description]\n"));
        assert!(header.contains("--   2024-03-09  ops          Initial version.\n"));
        assert!(!header.contains("N/A"));
    }

    #[test]
    fn parameterless_header_says_not_applicable() {
        let header = Header {
            description: "Lists records.",
            author: "ops",
            creation_date: date!(2024 - 03 - 09),
            parameters: &[],
            returns: "Result set of all records.",
        }
        .to_string();

        assert!(header.contains("-- Parameters: N/A\n"));
        assert!(!header.contains("[Parameter description]"));
    }
}
