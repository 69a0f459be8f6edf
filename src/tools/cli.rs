use clap::Parser;
use log::{debug, info, LevelFilter};
use std::{fmt::Display, fmt::Formatter};

use crate::compression::decompress::Verification;

/// Suffix added to compressed files.
pub const SUFFIX: &str = ".lzp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Zip, Unzip, Test
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

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A context-predicting (LZP1) file compressor",
    long_about = "
    LZP1 predicts every byte from a hash of the three bytes before it, and stores confirmed
    predictions as match lengths. Compressed files carry no header or checksum, so
    decompressing a file that was not made by this tool may succeed and produce garbage.
    Use --strict (or -t) for the extra checks that are possible without a checksum."
)]
pub struct Args {
    /// File to process
    #[clap()]
    file: String,

    /// Output file. Defaults to FILE.lzp, or FILE without .lzp when decompressing
    #[clap()]
    output: Option<String>,

    /// Compress the input file (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Decompress the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Test compressed file integrity (strict decompression, nothing written)
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Overwrite the output file without asking
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Reject streams that fail the strict checks when decompressing
    #[clap(long = "strict")]
    strict: bool,

    /// Sets verbosity. 0 is silent, 3 reports results, 5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// All user settable options that control program behavior.
#[derive(Debug)]
pub struct LzpOpts {
    /// File to read for input
    pub input: String,
    /// File to write the result to
    pub output: String,
    /// Silently overwrite an existing output file
    pub force_overwrite: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Checks applied when decompressing
    pub verification: Verification,
    /// Maximum log level
    pub verbosity: LevelFilter,
}

impl LzpOpts {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            force_overwrite: false,
            op_mode: Mode::Zip,
            verification: Verification::Lenient,
            verbosity: LevelFilter::Info,
        }
    }
}

impl Default for LzpOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the command line and set the log level from it.
pub fn lzpopts_init() -> LzpOpts {
    let opts = lzp_opts_from(Args::parse());
    log::set_max_level(opts.verbosity);

    info!("---- LZP Initialization ----");
    debug!("Verbosity set to {}", log::max_level());
    debug!("Operational mode set to {}", opts.op_mode);
    debug!("Reading {}", opts.input);
    if opts.op_mode != Mode::Test {
        debug!("Writing {}", opts.output);
    }
    if opts.force_overwrite {
        debug!("Forcing file overwriting");
    }
    if opts.verification == Verification::Strict {
        debug!("Strict stream checks enabled");
    }
    opts
}

/// Copy parsed arguments into our internal structure.
pub fn lzp_opts_from(args: Args) -> LzpOpts {
    let mut opts = LzpOpts::new();
    // Test wins, then an explicit compress, then decompress
    opts.op_mode = if args.test {
        Mode::Test
    } else if args.decompress && !args.compress {
        Mode::Unzip
    } else {
        Mode::Zip
    };
    opts.verification = if args.strict || opts.op_mode == Mode::Test {
        Verification::Strict
    } else {
        Verification::Lenient
    };
    opts.force_overwrite = args.force;
    opts.verbosity = level_filter(args.v);
    opts.output = args
        .output
        .unwrap_or_else(|| default_output(&args.file, opts.op_mode));
    opts.input = args.file;
    opts
}

/// Output name used when none is given.
pub fn default_output(input: &str, mode: Mode) -> String {
    match mode {
        Mode::Zip => format!("{}{}", input, SUFFIX),
        Mode::Unzip | Mode::Test => match input.strip_suffix(SUFFIX) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => format!("{}.out", input),
        },
    }
}

fn level_filter(v: u8) -> LevelFilter {
    match v {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
