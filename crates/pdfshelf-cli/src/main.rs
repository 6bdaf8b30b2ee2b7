mod cli;
mod scan_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);

    let config = cli.report_config();
    if let Err(code) = scan_cmd::run(&cli.dir, &config) {
        std::process::exit(code);
    }
}
