//! File handling around the codec: reading the input, guarding the output file, timing and
//! reporting.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, error, info, warn};

use super::cli::{LzpOpts, Mode};
use crate::compression::{compress::compress, decompress::decompress_with, MIN_INPUT_LEN};

/// Run the operation selected in opts, asking on stdin before overwriting anything.
pub fn run(opts: &LzpOpts) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(opts, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the operation selected in opts. Overwrite questions go to `prompt`, answers come from
/// `answers`.
pub fn run_with<R: BufRead, W: Write>(
    opts: &LzpOpts,
    answers: &mut R,
    prompt: &mut W,
) -> io::Result<()> {
    let input = read_input(&opts.input)?;

    if opts.op_mode != Mode::Test && !may_write(opts, answers, prompt)? {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", opts.output),
        ));
    }

    let timer = Instant::now();
    let result = match opts.op_mode {
        Mode::Zip => compress(&input),
        Mode::Unzip | Mode::Test => decompress_with(&input, opts.verification),
    };
    let elapsed = timer.elapsed().as_millis();

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            error!("{}: {}", opts.input, e);
            return Err(e.into());
        }
    };

    match opts.op_mode {
        Mode::Zip => {
            info!("Compress complete in {} milliseconds", elapsed);
            info!(
                "Compress ratio = {:.3} ({} ---> {})",
                ratio(input.len(), output.len()),
                input.len(),
                output.len()
            );
        }
        Mode::Unzip => info!("Decompress complete in {} milliseconds", elapsed),
        Mode::Test => {
            info!("{}: ok ({} bytes)", opts.input, output.len());
            return Ok(());
        }
    }

    // Only written once the codec succeeded, so a bad input never leaves a partial file
    fs::write(&opts.output, &output).map_err(|e| {
        error!("Could not write {}: {}", opts.output, e);
        e
    })?;
    debug!("Wrote {} bytes to {}", output.len(), opts.output);
    Ok(())
}

/// Read the whole input file, rejecting files too small for the codec.
pub fn read_input(path: &str) -> io::Result<Vec<u8>> {
    let data = fs::read(path).map_err(|e| {
        match e.kind() {
            io::ErrorKind::NotFound => error!("File {} does not exist!", path),
            io::ErrorKind::PermissionDenied => error!("I do not have permissions to read {}!", path),
            _ => error!("Some errors occurred while reading {}: {}", path, e),
        }
        e
    })?;
    if data.len() < MIN_INPUT_LEN {
        error!(
            "File {} is too small! Files must be at least {} bytes",
            path, MIN_INPUT_LEN
        );
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is only {} bytes", path, data.len()),
        ));
    }
    debug!("Read {} bytes from {}", data.len(), path);
    Ok(data)
}

/// True when the output file may be written: it does not exist yet, --force was given, or the
/// user said yes.
fn may_write<R: BufRead, W: Write>(
    opts: &LzpOpts,
    answers: &mut R,
    prompt: &mut W,
) -> io::Result<bool> {
    if !Path::new(&opts.output).exists() {
        return Ok(true);
    }
    if opts.force_overwrite {
        warn!("Overwriting {}", opts.output);
        return Ok(true);
    }
    confirm_overwrite(&opts.output, answers, prompt)
}

/// Ask until the answer is y or n. End of input counts as no.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &str,
    answers: &mut R,
    prompt: &mut W,
) -> io::Result<bool> {
    loop {
        write!(
            prompt,
            "File {} already exists. Do you want to rewrite it? (y/n): ",
            path
        )?;
        prompt.flush()?;

        let mut line = String::new();
        if answers.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => continue,
        }
    }
}

/// Output size over input size.
pub fn ratio(input_len: usize, output_len: usize) -> f64 {
    output_len as f64 / input_len as f64
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::decompress::Verification;
    use std::io::Cursor;

    fn opts(dir: &Path, mode: Mode, input: &str, output: &str) -> LzpOpts {
        LzpOpts {
            input: dir.join(input).to_string_lossy().into_owned(),
            output: dir.join(output).to_string_lossy().into_owned(),
            op_mode: mode,
            ..LzpOpts::new()
        }
    }

    fn no_answers() -> Cursor<Vec<u8>> {
        Cursor::new(vec![])
    }

    #[test]
    fn confirm_overwrite_test() {
        let mut prompt = vec![];
        let mut answers = Cursor::new(b"maybe\nY\n".to_vec());
        assert!(confirm_overwrite("out.lzp", &mut answers, &mut prompt).unwrap());
        let asked = String::from_utf8(prompt).unwrap();
        assert_eq!(asked.matches("already exists").count(), 2);

        let mut answers = Cursor::new(b" n \n".to_vec());
        assert!(!confirm_overwrite("out.lzp", &mut answers, &mut io::sink()).unwrap());
        assert!(!confirm_overwrite("out.lzp", &mut no_answers(), &mut io::sink()).unwrap());
    }

    #[test]
    fn ratio_test() {
        assert_eq!(ratio(1000, 512), 0.512);
        assert_eq!(format!("{:.3}", ratio(3, 1)), "0.333");
    }

    #[test]
    fn file_round_trip_test() {
        let dir = tempfile::tempdir().unwrap();
        let text = b"one two three, one two three, one two three, four".repeat(20);
        fs::write(dir.path().join("plain.txt"), &text).unwrap();

        let zip = opts(dir.path(), Mode::Zip, "plain.txt", "plain.txt.lzp");
        run_with(&zip, &mut no_answers(), &mut io::sink()).unwrap();
        let packed = fs::read(&zip.output).unwrap();
        assert!(packed.len() < text.len());

        let test = opts(dir.path(), Mode::Test, "plain.txt.lzp", "unused");
        run_with(&test, &mut no_answers(), &mut io::sink()).unwrap();
        assert!(!dir.path().join("unused").exists());

        let unzip = opts(dir.path(), Mode::Unzip, "plain.txt.lzp", "restored.txt");
        run_with(&unzip, &mut no_answers(), &mut io::sink()).unwrap();
        assert_eq!(fs::read(&unzip.output).unwrap(), text);
    }

    #[test]
    fn too_small_test() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tiny"), b"abc").unwrap();
        let zip = opts(dir.path(), Mode::Zip, "tiny", "tiny.lzp");
        let err = run_with(&zip, &mut no_answers(), &mut io::sink()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(!dir.path().join("tiny.lzp").exists());
    }

    #[test]
    fn missing_input_test() {
        let dir = tempfile::tempdir().unwrap();
        let zip = opts(dir.path(), Mode::Zip, "nothing", "nothing.lzp");
        let err = run_with(&zip, &mut no_answers(), &mut io::sink()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn declined_overwrite_test() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("in.txt"), b"some input data").unwrap();
        fs::write(dir.path().join("in.txt.lzp"), b"keep me").unwrap();
        let zip = opts(dir.path(), Mode::Zip, "in.txt", "in.txt.lzp");

        let mut answers = Cursor::new(b"n\n".to_vec());
        let err = run_with(&zip, &mut answers, &mut io::sink()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(fs::read(&zip.output).unwrap(), b"keep me");

        let forced = LzpOpts {
            force_overwrite: true,
            ..opts(dir.path(), Mode::Zip, "in.txt", "in.txt.lzp")
        };
        run_with(&forced, &mut no_answers(), &mut io::sink()).unwrap();
        assert_ne!(fs::read(&zip.output).unwrap(), b"keep me");
    }

    #[test]
    fn strict_rejects_foreign_data_test() {
        let dir = tempfile::tempdir().unwrap();
        // Trailing literal with zero padding: accepted leniently, rejected by -t
        fs::write(dir.path().join("odd.lzp"), [0x41, 0x42, 0x43, 0xA2, 0x00]).unwrap();
        let test = opts(dir.path(), Mode::Test, "odd.lzp", "unused");
        let test = LzpOpts {
            verification: Verification::Strict,
            ..test
        };
        let err = run_with(&test, &mut no_answers(), &mut io::sink()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
