//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use lzp::tools::{cli::lzpopts_init, files::run};

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace. The command line narrows this.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let options = lzpopts_init();

    //----- Figure out what we need to do and go do it
    run(&options)?;

    info!("Done.");
    Ok(())
}
