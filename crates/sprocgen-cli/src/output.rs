use crate::error::CliError;
use sprocgen::build::GeneratedFile;
use std::{
    fs,
    path::{Path, PathBuf},
};

///
/// WriteReport
///

#[derive(Debug, Default, Eq, PartialEq)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub skipped: usize,
}

/// Write each file into `dir`, creating it first. Files are written one at
/// a time; if one fails, those already written are left in place.
/// `on_written` is called after each successful write.
pub fn write_files(
    dir: &Path,
    files: &[GeneratedFile],
    mut on_written: impl FnMut(&Path),
) -> Result<WriteReport, CliError> {
    fs::create_dir_all(dir).map_err(|source| CliError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut report = WriteReport::default();

    for file in files {
        let path = dir.join(&file.file_name);

        if file.output.is_skipped() {
            tracing::warn!(action = %file.action, "{}", file.output.text());
            report.skipped += 1;
        }

        fs::write(&path, file.output.text()).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "wrote procedure");

        on_written(&path);
        report.written.push(path);
    }

    Ok(report)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use sprocgen::prelude::*;
    use time::macros::date;

    fn files(columns: Vec<ColumnDescriptor>) -> Vec<GeneratedFile> {
        let table = TableSchema::new("dbo", "Customer", columns).unwrap();

        ProcedureBuilder::new(table, "ops", date!(2024 - 01 - 31)).generate_all()
    }

    #[test]
    fn writes_all_four_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("Generated_SPs");
        let files = files(vec![
            ColumnDescriptor::new("Id", "int").primary_key().identity(),
            ColumnDescriptor::new("Name", "varchar(50)"),
        ]);

        let mut seen = Vec::new();
        let report = write_files(&out, &files, |p| seen.push(p.to_path_buf())).unwrap();

        assert_eq!(report.written, seen);
        assert_eq!(report.skipped, 0);

        let mut names: Vec<_> = fs::read_dir(&out)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(
            names,
            [
                "usp_Customer_Create.sql",
                "usp_Customer_Get.sql",
                "usp_Customer_List.sql",
                "usp_Customer_Update.sql",
            ]
        );

        let create = fs::read_to_string(out.join("usp_Customer_Create.sql")).unwrap();
        assert_eq!(create, files[0].output.text());
    }

    #[test]
    fn skipped_procedures_are_written_as_comments() {
        let dir = tempfile::tempdir().unwrap();
        let files = files(vec![ColumnDescriptor::new("Name", "varchar(50)")]);

        let report = write_files(dir.path(), &files, |_| {}).unwrap();

        assert_eq!(report.written.len(), 4);
        assert_eq!(report.skipped, 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("usp_Customer_Get.sql")).unwrap(),
            "-- Cannot generate GET for Customer: table has no primary key."
        );
    }

    #[test]
    fn earlier_files_survive_a_failed_write() {
        let dir = tempfile::tempdir().unwrap();
        let files = files(vec![
            ColumnDescriptor::new("Id", "int").primary_key(),
            ColumnDescriptor::new("Name", "varchar(50)"),
        ]);
        // a directory squatting on the third file name makes that write fail
        fs::create_dir(dir.path().join(&files[2].file_name)).unwrap();

        let err = write_files(dir.path(), &files, |_| {}).unwrap_err();

        assert!(matches!(err, CliError::Write { .. }));
        assert!(dir.path().join(&files[0].file_name).is_file());
        assert!(dir.path().join(&files[1].file_name).is_file());
        assert!(!dir.path().join(&files[3].file_name).exists());
    }
}
