use std::error::Error;
use stockroom::cli::run_cli;

fn main() -> Result<(), Box<dyn Error>> {
    run_cli()
}
