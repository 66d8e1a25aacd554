use anyhow::Context;
use bdb_core::{plot_entry, PlotOptions, TracingDiagnostics};
use bdb_io::{PdbId, StructureStore};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Plot PDB against BDB B-factors for one entry and write the chart as PNG.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// PDB identifier, e.g. 1crn
    pdb_id: PdbId,

    /// Root of the PDB structure mirror
    #[arg(long, required = true)]
    pdb_dir: PathBuf,

    /// Root of the BDB structure mirror
    #[arg(long, required = true)]
    bdb_dir: PathBuf,

    /// Plot every atom instead of C-alpha atoms only
    #[arg(long)]
    all_atoms: bool,

    /// Plot B-factors scaled to zero mean and unit variance
    #[arg(long)]
    normalize: bool,

    /// Pixels per figure unit
    #[arg(long, default_value_t = 100.0)]
    dpi: f64,

    /// Output file; the PNG goes to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    fn options(&self) -> PlotOptions {
        PlotOptions {
            backbone_only: !self.all_atoms,
            normalize: self.normalize,
            dpi: self.dpi,
        }
    }

    pub fn execute(self) -> anyhow::Result<ExitCode> {
        let store = StructureStore::new(&self.pdb_dir, &self.bdb_dir);
        let Some(png) = plot_entry(
            &store,
            self.pdb_id.as_str(),
            &self.options(),
            &TracingDiagnostics,
        )?
        else {
            error!("No PDB entry found for {}", self.pdb_id);
            return Ok(ExitCode::from(2));
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, png.as_bytes())
                    .with_context(|| format!("writing {}", path.display()))?;
                info!("Wrote {} ({})", path.display(), png.mime_type());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(png.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_options_from_flags() {
        let cli = Cli::parse_from([
            "bdb-plot", "1CRN", "--pdb-dir", "pdb", "--bdb-dir", "bdb", "--all-atoms", "-vv",
        ]);
        assert_eq!(cli.pdb_id.as_str(), "1crn");
        assert_eq!(cli.verbose, 2);
        let options = cli.options();
        assert!(!options.backbone_only);
        assert!(!options.normalize);
        assert_eq!(options.dpi, 100.0);
    }

    #[test]
    fn test_rejects_invalid_id() {
        let result = Cli::try_parse_from(["bdb-plot", "crn", "--pdb-dir", "a", "--bdb-dir", "b"]);
        assert!(result.is_err());
    }
}
