//! JSON file storage for repository collections.
//!
//! Each collection lives in its own document, a JSON object mapping record id
//! to record. Writes go to a sibling temporary file that is then renamed over
//! the target, so a failed write leaves the previous document intact. On
//! load, every key must equal the id carried by its record.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{EngineError, EngineResult};
use crate::models::{Department, Employee, Payroll};

/// A record filed under its own id.
pub(crate) trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Employee {
    fn key(&self) -> &str {
        &self.employee_id
    }
}

impl Keyed for Department {
    fn key(&self) -> &str {
        &self.department_id
    }
}

impl Keyed for Payroll {
    fn key(&self) -> &str {
        self.payroll_id()
    }
}

/// The three independently persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Employee master data.
    Employees,
    /// Department master data.
    Departments,
    /// Historical payroll records.
    Payrolls,
}

impl Collection {
    /// All collections in load order.
    pub const ALL: [Collection; 3] = [
        Collection::Employees,
        Collection::Departments,
        Collection::Payrolls,
    ];

    /// File name of the collection's document inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Employees => "employees.json",
            Collection::Departments => "departments.json",
            Collection::Payrolls => "payrolls.json",
        }
    }

    /// Lowercase name used in logs and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Employees => "employees",
            Collection::Departments => "departments",
            Collection::Payrolls => "payrolls",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads and writes collection documents in one directory.
#[derive(Debug, Clone)]
pub(crate) struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub(crate) fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub(crate) fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub(crate) fn path_of(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }

    /// Reads a collection document.
    ///
    /// A missing file yields an empty map. Any other I/O failure, a document
    /// that does not parse, or a record filed under a key other than its own
    /// id yields `CorruptStorage`.
    pub(crate) fn load<T: DeserializeOwned + Keyed>(
        &self,
        collection: Collection,
    ) -> EngineResult<BTreeMap<String, T>> {
        let path = self.path_of(collection);
        let corrupt = |message: String| EngineError::CorruptStorage {
            path: path.display().to_string(),
            message,
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(corrupt(format!("read failed: {}", e))),
        };
        let records: BTreeMap<String, T> = serde_json::from_str(&content)
            .map_err(|e| corrupt(format!("parse failed: {}", e)))?;

        let misfiled = records
            .iter()
            .find(|(key, record)| key.as_str() != record.key());
        if let Some((key, record)) = misfiled {
            return Err(corrupt(format!(
                "key '{}' holds record '{}'",
                key,
                record.key()
            )));
        }
        Ok(records)
    }

    /// Overwrites a collection document with `records`.
    pub(crate) fn save<T: Serialize>(
        &self,
        collection: Collection,
        records: &BTreeMap<String, T>,
    ) -> EngineResult<()> {
        let path = self.path_of(collection);
        let persistence_error = |message: String| EngineError::Persistence {
            path: path.display().to_string(),
            message,
        };

        fs::create_dir_all(&self.data_dir).map_err(|e| persistence_error(e.to_string()))?;
        let content =
            serde_json::to_string_pretty(records).map_err(|e| persistence_error(e.to_string()))?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(|e| persistence_error(e.to_string()))?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            persistence_error(e.to_string())
        })
    }
}
