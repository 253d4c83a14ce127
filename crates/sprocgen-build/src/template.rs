use crate::{ProcedureBuilder, action::Action, format::params_list, header::Header};
use sprocgen_schema::ColumnDescriptor;

/// Statement indent inside `BEGIN TRY`.
pub(crate) const BODY: &str = "        ";

/// Continuation indent for column, SET and VALUES lists.
pub(crate) const LIST: &str = "            ";

const PARAM: &str = "    ";

/// Picked up by a later encryption pass; not acted on here.
const ENCRYPTABLE_MARKER: &str = "--@Encryptable: WITH ENCRYPTION";

///
/// ErrorGuard
///
/// How the body is wrapped. Writes run inside a transaction that is rolled
/// back on any error before the error is re-raised; reads only re-raise.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ErrorGuard {
    Transaction,
    ReadOnly,
}

///
/// Procedure
///
/// Everything that varies between the four procedure templates.
///

pub(crate) struct Procedure<'a> {
    pub action: Action,
    pub description: &'a str,
    pub returns: &'a str,
    pub parameters: &'a [&'a ColumnDescriptor],
    pub guard: ErrorGuard,
    pub statements: String,
}

impl Procedure<'_> {
    pub(crate) fn render(&self, builder: &ProcedureBuilder) -> String {
        let table = builder.table();
        let header = Header {
            description: self.description,
            author: builder.author(),
            creation_date: builder.creation_date(),
            parameters: self.parameters,
            returns: self.returns,
        };

        let mut signature = format!(
            "CREATE PROCEDURE [{}].[{}]",
            table.schema_name(),
            builder.names().procedure(self.action)
        );
        if !self.parameters.is_empty() {
            signature.push('\n');
            signature.push_str(&params_list(self.parameters, PARAM, true));
        }

        let statements = &self.statements;
        let body = match self.guard {
            ErrorGuard::Transaction => format!(
                "    BEGIN TRY
        BEGIN TRANSACTION;

{statements}

        COMMIT TRANSACTION;
    END TRY
    BEGIN CATCH
        IF @@TRANCOUNT > 0
            ROLLBACK TRANSACTION;
        THROW;
    END CATCH"
            ),
            ErrorGuard::ReadOnly => format!(
                "    BEGIN TRY

{statements}

    END TRY
    BEGIN CATCH
        THROW;
    END CATCH"
            ),
        };

        format!(
            "{header}

{signature}
{ENCRYPTABLE_MARKER}
AS
BEGIN
    SET NOCOUNT ON;
    SET XACT_ABORT ON;

{body}
END;
"
        )
    }
}
