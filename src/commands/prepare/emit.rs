use super::*;

fn output_error(path: &Path, err: impl std::fmt::Display) -> PrepareError {
    PrepareError::OutputWrite {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

pub(super) fn write_output_csv(path: &Path, table: &OutputTable) -> Result<(), PrepareError> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| output_error(path, err))?;

    writer
        .write_record(table.header.output_columns())
        .map_err(|err| output_error(path, err))?;
    for row in table.rows() {
        writer
            .write_record(&row)
            .map_err(|err| output_error(path, err))?;
    }

    writer.flush().map_err(|err| output_error(path, err))
}

pub(super) fn write_job_config(path: &Path, config: &JobConfig) -> Result<(), PrepareError> {
    let file = File::create(path).map_err(|err| output_error(path, err))?;
    serde_yaml::to_writer(file, config).map_err(|err| output_error(path, err))
}
