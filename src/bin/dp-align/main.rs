use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use dp_align::input::{self, SequencePair};
use dp_align::{Aligner, AlignmentMode, Assembler, CostModel, TableReporter};

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "dp-align")]
#[command(about = "Exhaustive co-optimal sequence alignment and fragment assembly")]
#[command(version)]
#[command(long_about = "
Computes every optimal alignment between pairs of sequences, globally
(minimum edit cost) or locally (maximum similarity), and assembles a consensus
from fragments locally aligned to a template.

Examples:
  dp-align global pairs.txt
  dp-align local pairs.txt --show-matrices
  dp-align assemble fragments.txt --output consensus.txt
")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (TOML) with cost tables and limits
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Global alignment of every pair of lines in FILE
    Global {
        /// Pair file: two lines per alignment
        file: PathBuf,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Local alignment of every pair of lines in FILE
    Local {
        /// Pair file: two lines per alignment
        file: PathBuf,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Assemble a consensus from a template (first line) and fragments
    Assemble {
        /// Assembly file: template line followed by fragment lines
        file: PathBuf,
        /// Also write the consensus to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Clone, Default)]
struct CommonArgs {
    /// Insertion cost (gap in the first sequence)
    #[arg(long, allow_negative_numbers = true)]
    insertion: Option<f64>,
    /// Deletion cost (gap in the second sequence)
    #[arg(long, allow_negative_numbers = true)]
    deletion: Option<f64>,
    /// Substitution cost
    #[arg(long, allow_negative_numbers = true)]
    substitution: Option<f64>,
    /// Match cost (a reward in local mode)
    #[arg(long = "match-score", allow_negative_numbers = true)]
    match_score: Option<f64>,
    /// Stop after this many alignments per pair
    #[arg(long)]
    max_alignments: Option<usize>,
    /// Print score and direction matrices before the alignments
    #[arg(long)]
    show_matrices: bool,
}

impl CommonArgs {
    fn apply(&self, mut costs: CostModel) -> CostModel {
        if let Some(v) = self.insertion {
            costs.insertion = v;
        }
        if let Some(v) = self.deletion {
            costs.deletion = v;
        }
        if let Some(v) = self.substitution {
            costs.substitution = v;
        }
        if let Some(v) = self.match_score {
            costs.match_score = v;
        }
        costs
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    match cli.command {
        Command::Global { file, common } => {
            run_pairs(&file, AlignmentMode::Global, &common, &config)
        }
        Command::Local { file, common } => run_pairs(&file, AlignmentMode::Local, &common, &config),
        Command::Assemble {
            file,
            output,
            common,
        } => run_assemble(&file, output.as_deref(), &common, &config),
    }
}

fn make_aligner(mode: AlignmentMode, common: &CommonArgs, config: &Config) -> Result<Aligner> {
    let costs = common.apply(config.costs_for(mode));
    let mut limits = config.enumeration_limits();
    if common.max_alignments.is_some() {
        limits.max_results = common.max_alignments;
    }
    Aligner::builder(mode)
        .costs(costs)
        .limits(limits)
        .build()
        .context("Invalid cost model")
}

fn run_pairs(
    file: &std::path::Path,
    mode: AlignmentMode,
    common: &CommonArgs,
    config: &Config,
) -> Result<()> {
    let aligner = make_aligner(mode, common, config)?;
    let pairs = input::read_pairs_from_path(file)?;
    log::info!("Read {} sequence pairs from {}", pairs.len(), file.display());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (n, SequencePair { a, b }) in pairs.iter().enumerate() {
        let matrix = if common.show_matrices {
            let mut reporter = TableReporter::new(&mut out);
            aligner.build_matrix_reported(a, b, &mut reporter)?
        } else {
            aligner.build_matrix(a, b)?
        };

        writeln!(
            out,
            "pair {}: {} vs {} ({mode}, score {})",
            n + 1,
            String::from_utf8_lossy(a),
            String::from_utf8_lossy(b),
            matrix.best_score()
        )?;

        let mut alignments = aligner.alignments(&matrix, None)?;
        for aln in alignments.by_ref() {
            let (top, bottom) = aln.to_strings();
            writeln!(out, "{top}\n{bottom}\n")?;
        }
        if alignments.is_truncated() {
            log::warn!(
                "pair {}: stopped after {} alignments",
                n + 1,
                alignments.emitted()
            );
        }
    }
    out.flush()?;
    Ok(())
}

fn run_assemble(
    file: &std::path::Path,
    output: Option<&std::path::Path>,
    common: &CommonArgs,
    config: &Config,
) -> Result<()> {
    let costs = common.apply(config.costs_for(AlignmentMode::Local));
    let assembler = Assembler::new(costs).context("Invalid cost model")?;
    let job = input::read_assembly_from_path(file)?;
    log::info!(
        "Assembling {} fragments against a template of length {}",
        job.fragments.len(),
        job.template.len()
    );

    let assembly = assembler.assemble(&job.template, &job.fragments)?;
    for fragment in &assembly.fragments {
        log::debug!(
            "fragment {} offset {} score {}",
            fragment.index,
            fragment.offset,
            fragment.score
        );
    }

    let stdout = io::stdout();
    input::write_consensus(stdout.lock(), &assembly.consensus)?;

    if let Some(path) = output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        input::write_consensus(BufWriter::new(file), &assembly.consensus)?;
        log::info!("Consensus written to {}", path.display());
    }
    Ok(())
}
