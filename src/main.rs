use clap::Parser;
use gopack::cmd;
use std::path::PathBuf;
use std::process;

/// Go build-and-compress helper
///
/// gopack compiles a Go program with stripped symbols for a fixed target,
/// compresses the executable in place with UPX and reports the size saved.
/// UPX is downloaded into the home directory on first use.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output path (a directory with a trailing separator keeps the source name)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Go source file to build
    #[arg(short = 'f', long, value_name = "PATH")]
    file: PathBuf,
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = cmd::cmd_build(cli.output.as_deref(), &cli.file);

    if let Err(e) = result {
        use gopack::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
