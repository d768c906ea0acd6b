use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
};
use std::path::Path;

/// Starts the global logger.
///
/// `RUST_LOG` wins over `default_spec`. Output goes to stderr in color; when
/// `log_dir` is given, records are also written to size-rotated files there.
/// Keep the returned handle alive for as long as logging is needed.
pub fn setup_logging(
    default_spec: &str,
    log_dir: Option<&Path>,
) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(default_spec)?;

    match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .duplicate_to_stderr(Duplicate::Warn)
            .format_for_files(flexi_logger::detailed_format)
            .format_for_stderr(flexi_logger::colored_default_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // rotate at 10 MB
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            )
            .start(),
        None => logger
            .format(flexi_logger::colored_default_format)
            .start(),
    }
}
