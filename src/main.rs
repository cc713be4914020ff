/*!
 * Command-line interface for projdump
 */

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use projdump::config::{Args, Config};
use projdump::error::Result;
use projdump::logging;
use projdump::report::{ReportFormat, Reporter, ScanReport};
use projdump::scanner::Scanner;
use projdump::writer::XmlWriter;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "projdump", &mut io::stdout());
        return Ok(());
    }

    logging::init();

    let config = Config::from_args(args)?;
    config.validate()?;

    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos} files  ⏱️  {elapsed_precise}")
    {
        progress.set_style(style);
    }
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("📊 Snapshot");
    progress.set_message(format!(
        "📂 Scanning directory: {}",
        config.root_path.display()
    ));
    let progress = Arc::new(progress);

    let scanner = Scanner::from_config(&config, Arc::clone(&progress))?;
    let writer = XmlWriter::new(&config, Arc::clone(&progress));

    let start_time = Instant::now();
    let summary = writer.write(&scanner)?;
    let duration = start_time.elapsed();

    progress.finish_and_clear();

    let report = ScanReport::new(
        config.output_path.display().to_string(),
        duration,
        summary,
        &scanner.get_statistics(),
    );
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    Ok(())
}
