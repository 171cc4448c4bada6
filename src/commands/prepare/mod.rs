use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::PrepareArgs;
use crate::config::Settings;
use crate::error::PrepareError;
use crate::model::{
    BookRecord, CatalogHeader, FILE_COLUMN, ID_COLUMN, JobConfig, OutputRecord, OutputTable,
    PageRecord, PrepareCounts, PrepareRunManifest, REQUIRED_COLUMNS, RunDate, TITLE_COLUMN,
    TOTAL_SCANS_COLUMN,
};
use crate::util::{now_utc_string, sha256_file, write_json_pretty};

mod emit;
mod expand;
mod load;
mod run;
mod scans;

pub use run::run;

use emit::*;
use expand::*;
use load::*;
use scans::*;
