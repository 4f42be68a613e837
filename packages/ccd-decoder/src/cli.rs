//! Command-line interface for the decoder.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{DecodeOptions, NumericPolicy};
use crate::decoder::{decode_file, DecodeOutcome};
use crate::error::{DecodeError, Result};
use crate::summary::DocumentSummary;
use crate::yaml::{generate_yaml, save_yaml};

/// CCD Decoder - Decode HL7 CDA/CCD clinical document headers.
#[derive(Parser)]
#[command(name = "ccd-decoder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode one or more CDA documents.
    Decode {
        /// CDA XML files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// How malformed numeric attributes are handled (default: CCD_NUMERIC_POLICY or lenient)
        #[arg(short, long, value_enum)]
        numeric_policy: Option<NumericPolicy>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
        format: OutputFormat,

        /// Write one YAML file per document into this directory instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Summary,
    Yaml,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            files,
            numeric_policy,
            format,
            output,
        } => decode_command(&files, numeric_policy, format, output.as_deref()),
    }
}

/// Execute the decode command.
fn decode_command(
    files: &[PathBuf],
    numeric_policy: Option<NumericPolicy>,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let mut options = DecodeOptions::from_env()?;
    if let Some(policy) = numeric_policy {
        options = options.with_numeric_policy(policy);
    }

    if let Some(output_dir) = output {
        if output_dir.exists() && !output_dir.is_dir() {
            return Err(DecodeError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Output path is not a directory: {}", output_dir.display()),
            )));
        }
    }

    let pb = (files.len() > 1).then(|| {
        let pb = ProgressBar::new(files.len() as u64);
        #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:30.green} {pos}/{len} {msg}")
                .expect("valid template"),
        );
        pb
    });

    for path in files {
        if let Some(pb) = &pb {
            pb.set_message(path.display().to_string());
        }

        let outcome = match decode_file(path, &options) {
            Ok(outcome) => outcome,
            Err(e) => {
                if let Some(pb) = &pb {
                    pb.finish_and_clear();
                }
                return Err(e);
            }
        };

        let printed = |line: String| match &pb {
            Some(pb) => pb.println(line),
            None => println!("{line}"),
        };
        printed(render(path, &outcome, format, output)?);

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    Ok(())
}

/// Produce the text printed for one decoded file.
fn render(
    path: &Path,
    outcome: &DecodeOutcome,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<String> {
    let mut lines = vec![format!(
        "{} {}",
        style("Decoded").bold(),
        style(path.display()).cyan()
    )];

    let Some(document) = &outcome.document else {
        lines.push(format!("  {}", style("No header data").yellow()));
        return Ok(lines.join("\n"));
    };

    match format {
        OutputFormat::Summary => {
            let today = chrono::Local::now().date_naive();
            let summary = DocumentSummary::from_document(document, today);
            let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

            lines.push(format!("  Title: {}", style(or_dash(summary.title)).green()));
            lines.push(format!("  Document ID: {}", or_dash(summary.document_id)));
            lines.push(format!("  Effective: {}", or_dash(summary.effective_date)));
            lines.push(format!("  Language: {}", or_dash(summary.language)));
            lines.push(format!("  Patient: {}", or_dash(summary.patient_name)));
            lines.push(format!(
                "  Born: {}{}",
                or_dash(summary.birth_date),
                summary
                    .age
                    .map(|age| format!(" (age {age})"))
                    .unwrap_or_default()
            ));
            lines.push(format!("  Gender: {}", or_dash(summary.gender)));
            lines.push(format!("  Authors: {}", summary.author_count));
            lines.push(format!("  Custodian: {}", or_dash(summary.custodian)));
        }
        OutputFormat::Yaml => match output {
            Some(dir) => {
                let stem = path
                    .file_stem()
                    .map_or_else(|| "document".into(), |s| s.to_string_lossy());
                let saved = save_yaml(document, &stem, dir)?;
                lines.push(format!(
                    "  {} {}",
                    style("Saved to:").green().bold(),
                    saved.display()
                ));
            }
            None => lines.push(generate_yaml(document)?),
        },
    }

    if !outcome.warnings.is_empty() {
        lines.push(format!(
            "  Warnings: {}",
            style(outcome.warnings.len()).yellow().bold()
        ));
        for warning in &outcome.warnings {
            lines.push(format!("    {warning}"));
        }
    }

    Ok(lines.join("\n"))
}
