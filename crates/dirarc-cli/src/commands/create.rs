//! `create` command: pack a directory into an archive.

use crate::cli::CreateArgs;
use crate::error::convert_archive_error;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use anyhow::bail;
use dirarc_core::ArchiveCreator;
use dirarc_core::NoopProgress;
use dirarc_core::formats::detect_format;
use tracing::debug;

/// Runs the `create` command.
///
/// `silent` suppresses the progress spinner (quiet or JSON mode).
pub fn execute(args: &CreateArgs, formatter: &dyn OutputFormatter, silent: bool) -> Result<()> {
    // A directory is left to the core, which reports it as a destination error.
    if args.output.is_file() && !args.force {
        bail!(
            "Output file already exists: {}\n\
             HINT: Use --force to overwrite it.",
            args.output.display()
        );
    }

    let format = match args.format {
        Some(format) => format,
        None => detect_format(&args.output)
            .map_err(|e| convert_archive_error(e, &args.output, &args.source_dir))?,
    };
    debug!(output = %args.output.display(), %format, "resolved archive format");

    let mut creator = ArchiveCreator::new()
        .output(&args.output)
        .source(&args.source_dir)
        .format(format);
    if let Some(prefix) = &args.prefix {
        creator = creator.root_prefix(prefix.as_str());
    }

    let result = if !silent && CliProgress::should_show() {
        let mut progress = CliProgress::new("Archiving");
        creator.create_with_progress(&mut progress)
    } else {
        creator.create_with_progress(&mut NoopProgress)
    };

    let report = result.map_err(|e| convert_archive_error(e, &args.output, &args.source_dir))?;

    formatter.format_creation_result(&args.output, format, &report)
}
