use super::*;

const MANIFEST_VERSION: u32 = 1;

#[derive(Debug)]
pub(super) struct PrepareOutcome {
    pub counts: PrepareCounts,
    pub output_csv_path: PathBuf,
    pub job_config_path: PathBuf,
    pub manifest_path: PathBuf,
    pub written: bool,
}

pub fn run(args: PrepareArgs, settings: &Settings) -> Result<()> {
    let date = RunDate::today();
    let outcome = execute(&args, settings, date)?;

    if outcome.written {
        info!(
            books = outcome.counts.books_expanded,
            pages = outcome.counts.pages_generated,
            rows = outcome.counts.output_rows,
            manifest = %outcome.manifest_path.display(),
            "process completed"
        );
    } else {
        info!(
            books = outcome.counts.books_expanded,
            pages = outcome.counts.pages_generated,
            rows = outcome.counts.output_rows,
            csv = %outcome.output_csv_path.display(),
            yaml = %outcome.job_config_path.display(),
            "dry-run complete; nothing written"
        );
    }

    Ok(())
}

/// Runs the whole pipeline for one catalog. Nothing is written unless every
/// row validated and expanded.
pub(super) fn execute(
    args: &PrepareArgs,
    settings: &Settings,
    date: RunDate,
) -> Result<PrepareOutcome> {
    let input_path = settings.csv_path.join(&args.filename);
    let scan_root = settings.scan_root();
    let output_csv_path = settings.csv_path.join(date.input_csv_name());
    let job_config_path = settings.workbench_path.join(date.job_config_name());
    let manifest_path = settings
        .csv_path
        .join("manifests")
        .join(format!("prepare_run_{}.json", date.iso()));

    info!(path = %input_path.display(), image_type = %args.image_type, "loading catalog");
    let (header, books) = load_catalog(&input_path)?;
    info!(rows = books.len(), "file loaded, validating and generating data");

    let expansion = expand_catalog(
        &scan_root,
        header,
        books,
        &args.image_type,
        &settings.image_viewer,
    )?;
    let counts = expansion.counts.clone();
    info!(
        books = counts.books_expanded,
        pages = counts.pages_generated,
        "scans validated and page rows generated"
    );

    if args.dry_run {
        return Ok(PrepareOutcome {
            counts,
            output_csv_path,
            job_config_path,
            manifest_path,
            written: false,
        });
    }

    let input_csv_sha256 = sha256_file(&input_path)?;

    info!(path = %output_csv_path.display(), rows = counts.output_rows, "writing CSV file");
    write_output_csv(&output_csv_path, &expansion.table)?;

    info!(path = %job_config_path.display(), "writing YAML file");
    write_job_config(&job_config_path, &JobConfig::new(settings, date))?;

    let manifest = PrepareRunManifest {
        manifest_version: MANIFEST_VERSION,
        run_date: date.iso(),
        generated_at: now_utc_string(),
        input_csv_path: input_path.display().to_string(),
        input_csv_sha256,
        image_type: args.image_type.clone(),
        output_csv_path: output_csv_path.display().to_string(),
        job_config_path: job_config_path.display().to_string(),
        counts: counts.clone(),
    };
    write_json_pretty(&manifest_path, &manifest)
        .with_context(|| format!("failed to write run manifest for {}", date.iso()))?;
    info!(path = %manifest_path.display(), "wrote run manifest");

    Ok(PrepareOutcome {
        counts,
        output_csv_path,
        job_config_path,
        manifest_path,
        written: true,
    })
}
