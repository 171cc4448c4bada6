use super::*;

#[derive(Debug)]
pub(super) struct Expansion {
    pub table: OutputTable,
    pub counts: PrepareCounts,
}

/// Builds the page records of one book, numbering ids from `first_id`.
pub(super) fn expand_book(
    directory: &Path,
    book: &BookRecord,
    expected_count: u32,
    first_id: u64,
    image_type: &str,
    display_hints: &str,
) -> Result<Vec<PageRecord>, PrepareError> {
    let paths = expected_page_paths(directory, &book.file, expected_count, image_type)?;

    Ok(paths
        .into_iter()
        .zip(1..=expected_count)
        .zip(first_id..)
        .map(|((file, weight), id)| PageRecord {
            id,
            parent_id: book.id.clone(),
            title: format!("{}, Page {weight}", book.title),
            file,
            weight,
            display_hints: display_hints.to_string(),
        })
        .collect())
}

/// Validates and expands every book in row order.
///
/// Page ids continue from the size of the working set: the input row count
/// plus every page generated for earlier books. Books come first in the
/// output table, followed by all pages in generation order.
pub(super) fn expand_catalog(
    directory: &Path,
    header: CatalogHeader,
    books: Vec<BookRecord>,
    image_type: &str,
    display_hints: &str,
) -> Result<Expansion, PrepareError> {
    let input_ids: HashSet<String> = books.iter().map(|book| book.id.clone()).collect();
    let mut counts = PrepareCounts {
        input_rows: books.len(),
        ..PrepareCounts::default()
    };

    let mut next_id = books.len() as u64 + 1;
    let mut expanded_books = Vec::with_capacity(books.len());
    let mut pages = Vec::new();

    for mut book in books {
        if let Some(expected_count) = book.total_scans {
            validate_scans(directory, &book.file, expected_count, image_type)?;

            let book_pages =
                expand_book(directory, &book, expected_count, next_id, image_type, display_hints)?;
            if let Some(page) = book_pages
                .iter()
                .find(|page| input_ids.contains(&page.id.to_string()))
            {
                return Err(PrepareError::IdCollision {
                    id: page.id,
                    row: book.row,
                });
            }

            debug!(
                row = book.row,
                id = %book.id,
                pages = book_pages.len(),
                first_page_id = next_id,
                "expanded book"
            );

            next_id += u64::from(expected_count);
            counts.books_expanded += 1;
            counts.pages_generated += book_pages.len();
            pages.extend(book_pages);
            book.file.clear();
        }
        expanded_books.push(book);
    }

    let records: Vec<OutputRecord> = expanded_books
        .into_iter()
        .map(OutputRecord::Book)
        .chain(pages.into_iter().map(OutputRecord::Page))
        .collect();
    counts.output_rows = records.len();

    Ok(Expansion {
        table: OutputTable { header, records },
        counts,
    })
}
