use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, bail};
use laguerre_algebra::{LaguerreEvaluator, Orbital};
use laguerre_cli::plot::{ChartOptions, render_svg, sample_orbitals, write_csv};
use laguerre_cli::repl;
use laguerre_cli::table::coefficient_table;
use laguerre_cli::terminal::{GenerateReport, render_result};
use laguerre_core::{PolynomialResult, Validated, validate};
use laguerre_model::{PolynomialRequest, StudioConfig};
use tracing::{info, info_span};

use crate::cli::{GenerateArgs, IndexArgs, RadialArgs};

pub fn run_repl(config: &StudioConfig) -> Result<()> {
    let evaluator = LaguerreEvaluator::new(&config.evaluation);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    repl::run_repl(stdin.lock(), &mut stdout, &mut stderr, &evaluator)
        .context("interactive session")
}

pub fn run_generate(args: &GenerateArgs, config: &StudioConfig) -> Result<()> {
    let request = resolve_request(&args.index, config)?;
    let span = info_span!("generate", %request);
    let _guard = span.enter();

    let expansion = LaguerreEvaluator::new(&config.evaluation).expand(request)?;
    let result = PolynomialResult::new(request, expansion.markup, &config.format);
    info!(layout = ?result.display().layout(), "generated polynomial");

    let mut stdout = io::stdout().lock();
    if args.json {
        let report = GenerateReport::new(&result, config)?;
        serde_json::to_writer_pretty(&mut stdout, &report).context("write JSON")?;
        writeln!(stdout)?;
    } else if args.display {
        let (canvas, _) = render_result(&result, config)?;
        writeln!(stdout, "{}", canvas.to_text())?;
    } else {
        writeln!(stdout, "{}", result.raw_expression())?;
    }
    Ok(())
}

pub fn run_coefficients(args: &IndexArgs, config: &StudioConfig) -> Result<()> {
    let request = resolve_request(args, config)?;
    let expansion = LaguerreEvaluator::new(&config.evaluation).expand(request)?;
    println!("{request}");
    println!("{}", coefficient_table(&expansion.polynomial));
    Ok(())
}

pub fn run_radial(args: &RadialArgs, config: &StudioConfig) -> Result<()> {
    let orbitals = if args.orbitals.is_empty() {
        Orbital::defaults()
    } else {
        args.orbitals
            .iter()
            .map(|label| label.parse::<Orbital>())
            .collect::<Result<Vec<_>, _>>()?
    };
    let series = sample_orbitals(
        &orbitals,
        args.z,
        args.r_max,
        args.samples,
        &config.evaluation,
    )?;

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("create {}", args.output_dir.display()))?;

    let csv_path = args.output_dir.join("radial.csv");
    let file =
        File::create(&csv_path).with_context(|| format!("create {}", csv_path.display()))?;
    write_csv(BufWriter::new(file), &series)?;

    let svg_path = args.output_dir.join("radial.svg");
    let options = ChartOptions {
        title: format!("Hydrogen-like radial wavefunctions (Z = {})", args.z),
        ..ChartOptions::default()
    };
    fs::write(&svg_path, render_svg(&series, &options))
        .with_context(|| format!("write {}", svg_path.display()))?;

    info!(orbitals = series.len(), samples = args.samples, "wrote radial plot");
    println!("CSV: {}", csv_path.display());
    println!("SVG: {}", svg_path.display());
    Ok(())
}

/// Validate the indices; above the safety threshold only with `--yes`.
fn resolve_request(args: &IndexArgs, config: &StudioConfig) -> Result<PolynomialRequest> {
    match validate(&args.n, &args.l, &config.validation)? {
        Validated::Ready(request) => Ok(request),
        Validated::NeedsConfirmation { request, warning } => {
            if args.yes {
                info!(%request, "large computation confirmed by --yes");
                Ok(request)
            } else {
                bail!(
                    "{}={} is above the recommended maximum of {}; pass --yes to generate it anyway",
                    warning.parameter,
                    warning.value,
                    warning.threshold
                )
            }
        }
    }
}
