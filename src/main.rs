use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process,
};

use clap::{error::ErrorKind, Parser};
use monty::MontyError;

#[derive(Parser, Debug)]
#[command(name = "monty", version, about = "Interpreter for Monty bytecode files")]
struct Args {
    /// Monty bytecode file to run
    #[arg(num_args = 0.., allow_hyphen_values = true)]
    files: Vec<PathBuf>,
}

fn try_main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => return Err(MontyError::Usage.into()),
    };

    let [file] = args.files.as_slice() else {
        return Err(MontyError::Usage.into());
    };

    let stdout = io::stdout();
    monty::run_file(file, BufWriter::new(stdout.lock()))?;
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
