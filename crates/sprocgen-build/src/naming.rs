use crate::action::Action;

const PREFIX: &str = "usp_";
const FILE_EXTENSION: &str = "sql";

///
/// ProcedureName
///
/// Derives procedure and file names from a table name:
/// `usp_<table>_<Action>` and `usp_<table>_<Action>.sql`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProcedureName {
    base: String,
}

impl ProcedureName {
    #[must_use]
    pub fn new(table_name: &str) -> Self {
        Self {
            base: format!("{PREFIX}{table_name}"),
        }
    }

    /// `usp_<table>`
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn procedure(&self, action: Action) -> String {
        format!("{}_{action}", self.base)
    }

    #[must_use]
    pub fn file_name(&self, action: Action) -> String {
        format!("{}.{FILE_EXTENSION}", self.procedure(action))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_usp_convention() {
        let name = ProcedureName::new("Customer");
        let files: Vec<_> = Action::ALL.iter().map(|&a| name.file_name(a)).collect();

        assert_eq!(
            files,
            [
                "usp_Customer_Create.sql",
                "usp_Customer_Get.sql",
                "usp_Customer_Update.sql",
                "usp_Customer_List.sql",
            ]
        );
    }

    #[test]
    fn procedure_name_has_no_extension() {
        let name = ProcedureName::new("OrderLine");

        assert_eq!(name.base(), "usp_OrderLine");
        assert_eq!(name.procedure(Action::Update), "usp_OrderLine_Update");
    }
}
