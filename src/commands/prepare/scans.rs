use super::*;

const MIN_PAGE_DIGITS: usize = 3;

/// `{folder}-{page:0W}.{ext}`, W = max(3, digits in `expected_count`).
pub(super) fn page_file_name(folder: &str, page: u32, expected_count: u32, image_type: &str) -> String {
    let width = expected_count.to_string().len().max(MIN_PAGE_DIGITS);
    format!("{folder}-{page:0width$}.{image_type}")
}

pub(super) fn book_directory(directory: &Path, folder: &str) -> Result<PathBuf, PrepareError> {
    let joined = directory.join(folder);
    std::path::absolute(&joined).map_err(|source| PrepareError::InputAccess {
        path: joined,
        source,
    })
}

/// Absolute paths of pages 1..=expected_count, in page order.
pub(super) fn expected_page_paths(
    directory: &Path,
    folder: &str,
    expected_count: u32,
    image_type: &str,
) -> Result<Vec<PathBuf>, PrepareError> {
    let book_dir = book_directory(directory, folder)?;
    Ok((1..=expected_count)
        .map(|page| book_dir.join(page_file_name(folder, page, expected_count, image_type)))
        .collect())
}

fn list_scans(book_dir: &Path, image_type: &str) -> Result<BTreeSet<PathBuf>, PrepareError> {
    let access = |source: std::io::Error| PrepareError::InputAccess {
        path: book_dir.to_path_buf(),
        source,
    };
    let suffix = format!(".{image_type}");

    let mut scans = BTreeSet::new();
    for entry in fs::read_dir(book_dir).map_err(access)? {
        let entry = entry.map_err(access)?;
        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(&suffix) {
            continue;
        }

        // Follows symlinks so linked scans count; directories never do.
        let path = book_dir.join(name);
        let metadata = fs::metadata(&path).map_err(|source| PrepareError::InputAccess {
            path: path.clone(),
            source,
        })?;
        if metadata.is_file() {
            scans.insert(path);
        }
    }

    Ok(scans)
}

/// Checks that `directory/folder` holds exactly the scans the naming
/// convention predicts for `expected_count` pages.
pub(super) fn validate_scans(
    directory: &Path,
    folder: &str,
    expected_count: u32,
    image_type: &str,
) -> Result<(), PrepareError> {
    let book_dir = book_directory(directory, folder)?;
    let found = list_scans(&book_dir, image_type)?;

    if found.len() != expected_count as usize {
        return Err(PrepareError::CountMismatch {
            folder: book_dir,
            expected: expected_count,
            actual: found.len(),
        });
    }

    let expected: BTreeSet<PathBuf> = expected_page_paths(directory, folder, expected_count, image_type)?
        .into_iter()
        .collect();

    if expected != found {
        return Err(PrepareError::NameMismatch {
            missing: file_names(expected.difference(&found)),
            unexpected: file_names(found.difference(&expected)),
            folder: book_dir,
        });
    }

    debug!(folder = %book_dir.display(), scans = found.len(), "scans validated");
    Ok(())
}

fn file_names<'a>(paths: impl Iterator<Item = &'a PathBuf>) -> Vec<String> {
    paths
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}
