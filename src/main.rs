//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::ExitCode;

use huffzip::compression::compress::compress;
use huffzip::compression::decompress::{decompress, test_integrity};
use huffzip::tools::cli::{huffopts_init, Mode};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

fn main() -> ExitCode {
    // Available log levels are Error, Warn, Info, Debug, Trace. Messages
    // go to stderr so -c can put the data stream on stdout.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let options = huffopts_init();

    //----- Work through each file on the command line. One bad file must
    //      not stop the rest from being processed.
    let mut failures = 0;
    for fname in &options.files {
        let result = match options.op_mode {
            Mode::Zip => compress(fname, &options),
            Mode::Unzip => decompress(fname, &options),
            Mode::Test => test_integrity(fname),
        };
        if let Err(e) = result {
            error!("{}: {}", fname, e);
            failures += 1;
        }
    }

    info!("Done.\n");
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
