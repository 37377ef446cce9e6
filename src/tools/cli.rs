//! Command line handling for huffzip.
//!
//! The flag surface follows the classic compressor conventions: -z/-d
//! pick the direction, -t checks a file without writing anything, and
//! -k/-f/-c adjust what happens to the files on disk.

use std::fmt::{Display, Formatter};

use clap::Parser;
use log::{info, LevelFilter};

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// All user settable options that control program behavior.
#[derive(Debug)]
pub struct HuffOpts {
    /// Names of files to process, in command line order
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            force_overwrite: false,
            keep_input_files: false,
            op_mode: Mode::Zip,
            output: Output::File,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses the external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "huffzip, a Huffman coding file compressor.",
    long_about = "
    Compresses files with a per-file Huffman code. The code tree is
    serialized into the output header, so a compressed file carries
    everything needed to restore the original bytes exactly."
)]
struct Args {
    /// Filenames of the files to process
    #[clap(required = true)]
    files: Vec<String>,

    /// Compress the input files (the default action)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Decompress the input files
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Test compressed file integrity without writing output
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Force overwriting of existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Send output to standard out
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Suppress noncritical messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Be verbose (-v info, -vv debug, -vvv trace)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: usize,
}

/// Parse the command line into a HuffOpts struct and set the log level.
pub fn huffopts_init() -> HuffOpts {
    let args = Args::parse();

    // Set the log level. -q keeps critical errors visible; it does not
    // silence them completely.
    let level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    log::set_max_level(level);

    // Mode flags in increasing precedence; the last one set wins.
    let mut op_mode = Mode::Zip;
    if args.compress {
        op_mode = Mode::Zip;
    }
    if args.decompress {
        op_mode = Mode::Unzip;
    }
    if args.test {
        op_mode = Mode::Test;
    }

    let output = if args.stdout {
        Output::Stdout
    } else {
        Output::File
    };

    let opts = HuffOpts {
        files: args.files,
        force_overwrite: args.force,
        // Writing to stdout must leave the input files in place.
        keep_input_files: args.keep || args.stdout,
        op_mode,
        output,
    };

    // Report initialization status to the user.
    info!("huffzip, a Huffman coding file compressor.");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Sending output to {}", opts.output);
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.keep_input_files {
        info!("Keeping input files")
    };

    opts
}
