use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};

use ptable_projector::export;
use ptable_projector::input;
use ptable_projector::render;
use ptable_projector::report::LeafReport;
use ptable_projector::search::ProjectionSearch;

struct CliArgs {
    input: PathBuf,
    raw: bool,
    seed: u64,
    json: Option<PathBuf>,
    verbose: bool,
}

const USAGE: &str = "\
usage: ptable_projector [options] <input-file>

Project every final standing the favourite team can reach, assuming it wins
all of its remaining fixtures.

options:
  --raw          plain output (no colours or box-drawing); also via NO_COLOR
  --seed <n>     seed for the arbitrary winner of inconsequential fixtures
  --json <path>  also write all projected standings to <path> as JSON
  --verbose      log parsing progress to stderr
  -h, --help     show this help";

fn parse_args() -> Result<Option<CliArgs>> {
    let mut input = None;
    let mut raw = false;
    let mut seed = 0u64;
    let mut json = None;
    let mut verbose = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--raw" => raw = true,
            "--verbose" => verbose = true,
            "--seed" => {
                let raw_seed = args.next().context("--seed requires a value")?;
                seed = raw_seed
                    .parse::<u64>()
                    .with_context(|| format!("invalid seed '{raw_seed}'"))?;
            }
            "--json" => {
                let path = args.next().context("--json requires a path")?;
                json = Some(PathBuf::from(path));
            }
            other if other.starts_with('-') => bail!("unknown option '{other}'"),
            other => {
                if input.is_some() {
                    bail!("unexpected extra argument '{other}'");
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    let Some(input) = input else {
        bail!("no input file given (try --help)");
    };
    Ok(Some(CliArgs {
        input,
        raw,
        seed,
        json,
        verbose,
    }))
}

fn run() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let Some(args) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };
    let raw = render::raw_output_requested(args.raw);

    let mut projection = input::load_projection(&args.input, args.verbose)?;
    let mut search = ProjectionSearch::new(
        &mut projection.registry,
        &mut projection.fixtures,
        projection.rules,
        projection.favourite,
        args.seed,
    );

    let mut collected: Vec<LeafReport> = Vec::new();
    let keep = args.json.is_some();
    search.run(&mut |report| {
        render::print_report(&report, raw);
        if keep {
            collected.push(report);
        }
    });

    if let Some(path) = &args.json {
        export::write_reports(path, &collected)?;
        if args.verbose {
            eprintln!(
                "[INFO] wrote {} projected standings to {}",
                collected.len(),
                path.display()
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
