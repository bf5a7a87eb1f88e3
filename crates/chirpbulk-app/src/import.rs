//! CSV import: reads the chosen file and creates one device per row
//!
//! Rows are `devEui, name, description?`. A first row whose first cell is not
//! hex is taken as a header. Rows with fewer than two cells are skipped, and a
//! failed create is logged without stopping the batch.

use std::path::{Path, PathBuf};

use chirpbulk_api::{DeviceRegistry, NewDevice};
use chirpbulk_core::prelude::*;
use chirpbulk_core::{data_start_index, ImportRecord, ImportResult};

/// Everything an import needs; built once all wizard selections exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportTarget {
    pub application_id: String,
    pub device_profile_id: String,
    pub file_path: PathBuf,
}

/// One line of the CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvRow {
    Cells(Vec<String>),
    /// A cell is not valid UTF-8; only this row fails
    Undecodable { cells: usize, reason: String },
}

impl CsvRow {
    fn decode(record: &csv::ByteRecord) -> Self {
        let decoded: std::result::Result<Vec<String>, _> = record
            .iter()
            .map(|cell| std::str::from_utf8(cell).map(str::to_string))
            .collect();
        match decoded {
            Ok(cells) => CsvRow::Cells(cells),
            Err(e) => CsvRow::Undecodable {
                cells: record.len(),
                reason: e.to_string(),
            },
        }
    }

    fn cell_count(&self) -> usize {
        match self {
            CsvRow::Cells(cells) => cells.len(),
            CsvRow::Undecodable { cells, .. } => *cells,
        }
    }
}

/// Read every row of a CSV file.
///
/// Rows may have differing cell counts; validation happens per row later.
pub fn read_rows(path: &Path) -> Result<Vec<CsvRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::file_read(path, e.to_string()))?;

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|e| Error::file_read(path, e.to_string()))?;
        rows.push(CsvRow::decode(&record));
    }
    Ok(rows)
}

/// Header detection on the first row; an undecodable first cell is not hex
fn first_data_row(rows: &[CsvRow]) -> usize {
    let first: Vec<Vec<String>> = rows
        .iter()
        .take(1)
        .map(|row| match row {
            CsvRow::Cells(cells) => cells.clone(),
            CsvRow::Undecodable { .. } => Vec::new(),
        })
        .collect();
    data_start_index(&first)
}

/// Create a device for every data row of the target file.
///
/// Creates run sequentially in file order. Only a file read failure aborts;
/// the returned count is the number of creates the server accepted.
pub async fn import_devices<R: DeviceRegistry>(
    registry: &R,
    target: &ImportTarget,
) -> Result<ImportResult> {
    let rows = read_rows(&target.file_path)?;
    let start = first_data_row(&rows);
    if start > 0 {
        debug!("Treating first row of {:?} as header", target.file_path);
    }

    let mut result = ImportResult::default();
    let mut failed = 0usize;
    let mut skipped = 0usize;

    for (index, row) in rows.iter().enumerate().skip(start) {
        if row.cell_count() < 2 {
            debug!("Skipping row {}: fewer than two cells", index + 1);
            skipped += 1;
            continue;
        }
        let cells = match row {
            CsvRow::Cells(cells) => cells,
            CsvRow::Undecodable { reason, .. } => {
                warn!("Cannot create device from row {}: {}", index + 1, reason);
                failed += 1;
                continue;
            }
        };
        let Some(record) = ImportRecord::from_row(cells) else {
            continue;
        };

        let device = NewDevice::from_record(
            record,
            target.application_id.as_str(),
            target.device_profile_id.as_str(),
        );

        match registry.create_device(&device).await {
            Ok(()) => {
                trace!("Created device {}", device.dev_eui);
                result.created += 1;
            }
            Err(e) => {
                warn!("{}", e);
                failed += 1;
            }
        }
    }

    info!(
        "Import of {:?} finished: {} created, {} failed, {} skipped",
        target.file_path, result.created, failed, skipped
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirpbulk_api::test_utils::FakeRegistry;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn write_csv(content: &str) -> (TempDir, ImportTarget) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("devices.csv");
        fs::write(&path, content).unwrap();
        let target = ImportTarget {
            application_id: "app-1".into(),
            device_profile_id: "prof-1".into(),
            file_path: path,
        };
        (dir, target)
    }

    #[tokio::test]
    async fn test_header_row_is_skipped() {
        let (_dir, target) = write_csv(
            "devEui,name,description\n\
             0102030405060708,sensor-1,Lobby\n\
             a1b2c3d4e5f60718,sensor-2,Roof\n",
        );
        let registry = FakeRegistry::new();

        let result = import_devices(&registry, &target).await.unwrap();

        assert_eq!(result.created, 2);
        let created = registry.created();
        assert_eq!(created[0].dev_eui, "0102030405060708");
        assert_eq!(created[0].name, "sensor-1");
        assert_eq!(created[0].description, "Lobby");
        assert_eq!(created[0].application_id, "app-1");
        assert_eq!(created[0].device_profile_id, "prof-1");
        assert!(!created[0].is_disabled);
        assert_eq!(created[1].dev_eui, "a1b2c3d4e5f60718");
    }

    #[tokio::test]
    async fn test_no_header_imports_first_row() {
        let (_dir, target) = write_csv("0102030405060708,sensor-1\n");
        let registry = FakeRegistry::new();

        let result = import_devices(&registry, &target).await.unwrap();

        assert_eq!(result.created, 1);
        assert_eq!(registry.created()[0].description, "");
    }

    #[tokio::test]
    async fn test_failed_row_does_not_stop_batch() {
        let (_dir, target) = write_csv(
            "0000000000000001,d1\n\
             0000000000000002,d2\n\
             0000000000000003,d3\n\
             0000000000000004,d4\n\
             0000000000000005,d5\n",
        );
        let registry = FakeRegistry::new().with_failing_device("0000000000000003");

        let result = import_devices(&registry, &target).await.unwrap();

        assert_eq!(result.created, 4);
        assert_eq!(registry.create_attempts().len(), 5);
        assert_eq!(
            registry.create_attempts(),
            vec![
                "0000000000000001",
                "0000000000000002",
                "0000000000000003",
                "0000000000000004",
                "0000000000000005",
            ]
        );
    }

    #[tokio::test]
    async fn test_short_row_is_skipped() {
        let (_dir, target) = write_csv(
            "0000000000000001,d1\n\
             0000000000000002\n\
             0000000000000003,d3\n",
        );
        let registry = FakeRegistry::new();

        let result = import_devices(&registry, &target).await.unwrap();

        assert_eq!(result.created, 2);
        assert_eq!(registry.create_attempts().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_file_creates_nothing() {
        let (_dir, target) = write_csv("");
        let registry = FakeRegistry::new();

        let result = import_devices(&registry, &target).await.unwrap();
        assert_eq!(result.created, 0);
    }

    #[tokio::test]
    async fn test_missing_file_fails_without_creates() {
        let dir = tempdir().unwrap();
        let target = ImportTarget {
            application_id: "app-1".into(),
            device_profile_id: "prof-1".into(),
            file_path: dir.path().join("missing.csv"),
        };
        let registry = FakeRegistry::new();

        let err = import_devices(&registry, &target).await.unwrap_err();

        assert!(matches!(err, Error::FileRead { .. }));
        assert!(registry.create_attempts().is_empty());
    }

    #[test]
    fn test_read_rows_keeps_ragged_rows() {
        let (_dir, target) = write_csv("a,b,c\nd\ne,f\n");
        let rows = read_rows(&target.file_path).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], CsvRow::Cells(vec!["d".to_string()]));
    }

    fn write_bytes(content: &[u8]) -> (TempDir, ImportTarget) {
        let (dir, target) = write_csv("");
        fs::write(&target.file_path, content).unwrap();
        (dir, target)
    }

    #[tokio::test]
    async fn test_invalid_utf8_fails_only_its_row() {
        let (_dir, target) = write_bytes(
            b"0000000000000001,d1\n0000000000000002,sensor-\xff\n0000000000000003,d3\n",
        );
        let registry = FakeRegistry::new();

        let result = import_devices(&registry, &target).await.unwrap();

        assert_eq!(result.created, 2);
        assert_eq!(
            registry.create_attempts(),
            vec!["0000000000000001", "0000000000000003"]
        );
    }

    #[tokio::test]
    async fn test_undecodable_first_row_is_header() {
        let (_dir, target) = write_bytes(b"\xfedevEui,name\n0000000000000001,d1\n");
        let registry = FakeRegistry::new();

        let result = import_devices(&registry, &target).await.unwrap();

        assert_eq!(result.created, 1);
    }

    #[test]
    fn test_undecodable_row_keeps_cell_count() {
        let (_dir, target) = write_bytes(b"\xff\n");
        let rows = read_rows(&target.file_path).unwrap();
        assert!(matches!(rows[0], CsvRow::Undecodable { cells: 1, .. }));
    }
}
