use super::*;

pub(super) fn load_catalog(path: &Path) -> Result<(CatalogHeader, Vec<BookRecord>), PrepareError> {
    let file = File::open(path).map_err(|source| PrepareError::InputAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let malformed = |source: csv::Error| PrepareError::MalformedCsv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    let header = CatalogHeader::new(
        reader
            .headers()
            .map_err(malformed)?
            .iter()
            .map(|name| name.trim_start_matches('\u{feff}').to_owned())
            .collect(),
    );

    if let Some(column) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !header.contains(column))
    {
        return Err(PrepareError::MissingColumn {
            path: path.to_path_buf(),
            column: *column,
        });
    }

    let mut books = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(malformed)?;
        let row = index + 1;

        let mut fields: HashMap<String, String> = header
            .columns()
            .iter()
            .cloned()
            .zip(record.iter().map(ToOwned::to_owned))
            .collect();

        let id = fields.remove(ID_COLUMN).unwrap_or_default();
        let title = fields.remove(TITLE_COLUMN).unwrap_or_default();
        let file = fields.remove(FILE_COLUMN).unwrap_or_default();
        let raw_scans = fields.remove(TOTAL_SCANS_COLUMN).unwrap_or_default();

        if !seen_ids.insert(id.clone()) {
            return Err(PrepareError::DuplicateId { id, row });
        }

        books.push(BookRecord {
            row,
            id,
            title,
            file,
            total_scans: parse_total_scans(row, &raw_scans)?,
            extra: fields,
        });
    }

    Ok((header, books))
}

/// Blank means the row is not a book with scans.
pub(super) fn parse_total_scans(row: usize, raw: &str) -> Result<Option<u32>, PrepareError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| PrepareError::InvalidScanCount {
            row,
            value: raw.to_string(),
        })
}
