use std::collections::HashMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::Settings;

pub const ID_COLUMN: &str = "id";
pub const TITLE_COLUMN: &str = "title";
pub const FILE_COLUMN: &str = "file";
pub const TOTAL_SCANS_COLUMN: &str = "total_scans";

pub const REQUIRED_COLUMNS: [&str; 4] = [ID_COLUMN, TITLE_COLUMN, FILE_COLUMN, TOTAL_SCANS_COLUMN];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogHeader {
    columns: Vec<String>,
}

impl CatalogHeader {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    /// Input columns in input order, minus `total_scans`.
    pub fn output_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|name| *name != TOTAL_SCANS_COLUMN)
            .collect()
    }
}

/// One book row of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    /// 1-based data row, not counting the header.
    pub row: usize,
    pub id: String,
    pub title: String,
    pub file: String,
    pub total_scans: Option<u32>,
    pub extra: HashMap<String, String>,
}

impl BookRecord {
    pub fn value(&self, column: &str) -> String {
        match column {
            ID_COLUMN => self.id.clone(),
            TITLE_COLUMN => self.title.clone(),
            FILE_COLUMN => self.file.clone(),
            _ => self.extra.get(column).cloned().unwrap_or_default(),
        }
    }
}

/// One scanned page generated from a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub id: u64,
    pub parent_id: String,
    pub title: String,
    pub file: PathBuf,
    pub weight: u32,
    pub display_hints: String,
}

impl PageRecord {
    pub const RESOURCE_TYPE: &'static str = "Text";
    pub const MODEL: &'static str = "Page";

    /// Columns without a page value render empty.
    pub fn value(&self, column: &str) -> String {
        match column {
            ID_COLUMN => self.id.to_string(),
            TITLE_COLUMN | "field_metadata_title" => self.title.clone(),
            FILE_COLUMN => self.file.to_string_lossy().into_owned(),
            "parent_id" => self.parent_id.clone(),
            "field_weight" => self.weight.to_string(),
            "field_resource_type" => Self::RESOURCE_TYPE.to_string(),
            "field_model" => Self::MODEL.to_string(),
            "field_display_hints" => self.display_hints.clone(),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputRecord {
    Book(BookRecord),
    Page(PageRecord),
}

impl OutputRecord {
    pub fn value(&self, column: &str) -> String {
        match self {
            Self::Book(book) => book.value(column),
            Self::Page(page) => page.value(column),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputTable {
    pub header: CatalogHeader,
    pub records: Vec<OutputRecord>,
}

impl OutputTable {
    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        let columns = self.header.output_columns();
        self.records
            .iter()
            .map(move |record| columns.iter().map(|column| record.value(column)).collect())
    }
}

/// Calendar date read once per run; names every artifact the run writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunDate(pub NaiveDate);

impl RunDate {
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    pub fn iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    pub fn input_csv_name(&self) -> String {
        format!("{}.csv", self.iso())
    }

    pub fn output_csv_name(&self) -> String {
        format!("{}_output.csv", self.iso())
    }

    pub fn job_config_name(&self) -> String {
        format!("{}.yml", self.iso())
    }
}

/// Islandora Workbench `create` task configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobConfig {
    pub task: String,
    pub host: String,
    pub username: String,
    pub password: String,
    pub input_dir: String,
    pub input_csv: String,
    pub output_csv: String,
    pub output_csv_include_input_csv: bool,
    pub allow_missing_files: bool,
    pub allow_adding_terms: bool,
    pub validate_title_length: bool,
    pub perform_soft_checks: bool,
    pub standalone_media_url: bool,
    pub delete_tmp_upload: bool,
    pub adaptive_pause: u32,
    pub adaptive_pause_threshold: f64,
    pub log_term_creation: bool,
    pub http_cache_storage: String,
    pub http_cache_storage_expire_after: u32,
}

impl JobConfig {
    pub fn new(settings: &Settings, date: RunDate) -> Self {
        Self {
            task: "create".to_string(),
            host: settings.host.clone(),
            username: settings.username.clone(),
            password: settings.password.clone(),
            input_dir: settings.csv_path.display().to_string(),
            input_csv: date.input_csv_name(),
            output_csv: date.output_csv_name(),
            output_csv_include_input_csv: true,
            allow_missing_files: true,
            allow_adding_terms: true,
            validate_title_length: false,
            perform_soft_checks: true,
            standalone_media_url: true,
            delete_tmp_upload: true,
            adaptive_pause: 2,
            adaptive_pause_threshold: 2.5,
            log_term_creation: false,
            http_cache_storage: "memory".to_string(),
            http_cache_storage_expire_after: 600,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrepareCounts {
    pub input_rows: usize,
    pub books_expanded: usize,
    pub pages_generated: usize,
    pub output_rows: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrepareRunManifest {
    pub manifest_version: u32,
    pub run_date: String,
    pub generated_at: String,
    pub input_csv_path: String,
    pub input_csv_sha256: String,
    pub image_type: String,
    pub output_csv_path: String,
    pub job_config_path: String,
    pub counts: PrepareCounts,
}
