use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use spjacobi::{
    BackendKind, DenseMatrix, JError, SolveContext, SolveOptions, SparseMatrix, format_vector,
    unit_rhs,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jacobi", version, about = "Jacobi iteration on dense or sparse storage")]
struct Cli {
    /// Storage backend: dense (or normal) | sparse
    backend: Option<String>,

    /// Size of the linear system
    n: Option<usize>,

    /// Stop early once no entry changes by this much in a sweep
    #[arg(long)]
    tol: Option<f64>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

const DEMO_SIZE: usize = 6;
const DEMO_SWEEPS: usize = 20;
const CHECKSUM_SWEEPS: usize = 100;

fn print_usage() {
    println!("usage:");
    println!("jacobi sparse <size of linear system>");
    println!("or:");
    println!("jacobi dense <size of linear system>");
    println!("like:");
    println!("jacobi sparse 12000");
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print both backends' matrices and solutions for the small demo system.
fn demo(tol: Option<f64>) -> Result<(), JError> {
    let opts = SolveOptions { tol, ..SolveOptions::new(BackendKind::Dense, DEMO_SIZE, DEMO_SWEEPS) };
    let solver = opts.solver();
    let b = unit_rhs(DEMO_SIZE)?;

    let m = DenseMatrix::new(DEMO_SIZE)?;
    print!("{m}");
    println!("{}", format_vector(&b));
    let mut x1 = vec![0.0; DEMO_SIZE];
    println!();
    println!("{}", format_vector(&x1));
    println!();
    solver.solve_view(&m, &b, &mut x1)?;
    println!();
    println!("{}", format_vector(&x1));

    let s = SparseMatrix::new(DEMO_SIZE)?;
    let mut x2 = vec![0.0; DEMO_SIZE];
    print!("{s}");
    solver.solve_sparse(&s, &b, &mut x2)?;
    println!("{}", format_vector(&x2));
    Ok(())
}

fn checksum(backend: BackendKind, n: usize, tol: Option<f64>) -> Result<(), JError> {
    let opts = SolveOptions { tol, ..SolveOptions::new(backend, n, CHECKSUM_SWEEPS) };
    let out = SolveContext::new(opts)?.run()?;
    println!("{}", out.sum);
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                }
                _ => print_usage(),
            }
            return;
        }
    };
    init_tracing(cli.verbose);

    let result = match (cli.backend.as_deref(), cli.n) {
        (None, None) => demo(cli.tol),
        (Some(name), Some(n)) => match name.parse::<BackendKind>() {
            Ok(kind) => checksum(kind, n, cli.tol),
            Err(_) => {
                print_usage();
                Ok(())
            }
        },
        _ => {
            print_usage();
            Ok(())
        }
    };
    if let Err(e) = result {
        eprintln!("error: {e}");
    }
}
