//!
//! The benchmark comparator executable.
//!

use colored::Colorize;

///
/// The application entry point.
///
fn main() {
    let exit_code = match main_inner() {
        Ok(()) => benchmark_comparator::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            benchmark_comparator::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner() -> anyhow::Result<()> {
    println!(
        "    {} {} v{}",
        "Starting".bright_green().bold(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    let grammar = benchmark_comparator::Grammar::embedded()
        .map_err(|error| anyhow::anyhow!("Measurement grammar loading: {error}"))?;
    let settings = benchmark_comparator::Settings::default();

    let session = benchmark_comparator::Session::new(settings, grammar);
    let outcome = session.run();

    let ranking = benchmark_comparator::Ranking::new(outcome.results.as_slice());
    let report = benchmark_comparator::Report::new(
        outcome.results.as_slice(),
        session.grammar(),
        &ranking,
        &outcome.metadata,
        session.settings().subject.as_str(),
        session.settings().baseline.as_str(),
    );
    println!();
    print!("{}", report.console());

    let report_path = session.settings().report_path.as_path();
    match report.write_to_file(report_path) {
        Ok(()) => println!(
            "       {} report to {report_path:?}",
            "Saved".bright_green().bold(),
        ),
        Err(error) => eprintln!("     {} {error}", "Warning".bright_yellow().bold()),
    }

    println!(
        "    {} comparison of {} languages in {:.3}s",
        "Finished".bright_green().bold(),
        outcome.results.len(),
        outcome.metadata.duration_secs(),
    );

    Ok(())
}
