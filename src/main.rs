//! repomind-scan CLI entry point

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use repomind_scanner::cli::{Commands, DetectArgs, OutputFormat, ScanArgs};
use repomind_scanner::{
    collect_sources, BatchScanner, Cli, FileRecord, LanguageDetector, RepoMetrics, ScanError,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn init_logging(verbose: bool) {
    let directive = if verbose {
        "repomind_scanner=debug"
    } else {
        "repomind_scanner=warn"
    };
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive.parse() {
        filter = filter.add_directive(directive);
    }

    // May fail if already initialized, which is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> repomind_scanner::Result<String> {
    match &cli.command {
        Commands::Scan(args) => run_scan(args),
        Commands::Detect(args) => run_detect(args),
    }
}

// ============================================
// Scan
// ============================================

#[derive(Serialize)]
struct ScanReport<'a> {
    root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<&'a [FileRecord]>,
    metrics: &'a RepoMetrics,
}

fn run_scan(args: &ScanArgs) -> repomind_scanner::Result<String> {
    if !args.path.exists() {
        return Err(ScanError::FileNotFound {
            path: args.path.display().to_string(),
        });
    }

    let config = args.resolve_config()?;
    let scanner = BatchScanner::new(config)?;
    let sources = collect_sources(&args.path)?;
    let records = scanner.scan_sources(sources)?;
    let metrics = RepoMetrics::from_records(&records);

    match args.format {
        OutputFormat::Json => {
            let report = ScanReport {
                root: args.path.display().to_string(),
                files: (!args.summary_only).then_some(records.as_slice()),
                metrics: &metrics,
            };
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| ScanError::Serialization {
                    message: format!("JSON serialization failed: {}", e),
                })?;
            Ok(format!("{}\n", json))
        }
        OutputFormat::Text => {
            let mut output = String::new();
            if !args.summary_only {
                for record in &records {
                    format_record(&mut output, record);
                }
            }
            format_metrics(&mut output, &args.path.display().to_string(), &metrics);
            Ok(output)
        }
    }
}

fn format_record(out: &mut String, record: &FileRecord) {
    out.push_str(&format!("{} [{}]\n", record.path, record.language));
    out.push_str(&format!(
        "  lines: {}  bytes: {}  docs: {}\n",
        record.line_count,
        record.size_bytes,
        record.documentation.len()
    ));
    if let Some(error) = &record.error {
        out.push_str(&format!("  error: {}\n", error));
    }
    for function in &record.functions {
        out.push_str(&format!(
            "  {}-{} {}\n",
            function.start_line, function.end_line, function.signature
        ));
    }
    out.push('\n');
}

fn format_metrics(out: &mut String, root: &str, metrics: &RepoMetrics) {
    out.push_str(&format!("directory: {}\n", root));
    out.push_str(&format!("files: {}\n", metrics.file_count));
    out.push_str(&format!("functions: {}\n", metrics.function_count));
    out.push_str(&format!("documentation: {}\n", metrics.documentation_count));
    out.push_str(&format!("lines: {}\n", metrics.total_lines));
    out.push_str(&format!("bytes: {}\n", metrics.total_bytes));
    if metrics.failed_count > 0 {
        out.push_str(&format!("failed: {}\n", metrics.failed_count));
    }
    out.push_str("languages:\n");
    for (language, count) in metrics.top_languages() {
        out.push_str(&format!("  {}: {}\n", language, count));
    }
    if !metrics.top_files.is_empty() {
        out.push_str("top files:\n");
        for file in &metrics.top_files {
            out.push_str(&format!("  {}: {}\n", file.path, file.function_count));
        }
    }
}

// ============================================
// Detect
// ============================================

fn run_detect(args: &DetectArgs) -> repomind_scanner::Result<String> {
    if !args.path.is_file() {
        return Err(ScanError::FileNotFound {
            path: args.path.display().to_string(),
        });
    }

    let bytes = fs::read(&args.path)?;
    let content = String::from_utf8_lossy(&bytes);
    let label = LanguageDetector::detect(&args.path.to_string_lossy(), Some(&content));

    tracing::debug!("Detected {} for {}", label, args.path.display());
    Ok(format!("{}\n", label))
}
