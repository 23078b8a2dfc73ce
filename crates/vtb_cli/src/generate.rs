//! `vtb generate` — write a testbench skeleton for each input file.
//!
//! Each input is read, its entity interface extracted and a harness rendered.
//! By default the harness is written next to the input as `<stem>_tb.<ext>`.
//! Inputs are independent, so they are processed in parallel; results are
//! reported in the order the files were given. A failing file does not stop
//! the others.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;
use vtb_config::{resolve_output_path, OutputConfig};
use vtb_emit::{Clock, HarnessEmitter};

use crate::pipeline::{display_name, is_stdin, read_source, resolve_config};
use crate::{GenerateArgs, GlobalArgs};

/// Where a rendered testbench goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Destination {
    /// Printed to standard output.
    Stdout,
    /// Written to a file.
    File(PathBuf),
}

/// The result of generating one testbench.
#[derive(Debug)]
pub(crate) struct Generated {
    /// Where the testbench was sent.
    pub destination: Destination,
    /// The rendered testbench.
    pub harness: String,
    /// Whether no entity declaration was found in the input.
    pub anonymous: bool,
}

/// Runs the `vtb generate` command.
///
/// Returns exit code 0 if every input produced a testbench, 1 otherwise.
pub fn run(args: &GenerateArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    if args.output.is_some() && args.files.len() != 1 {
        return Err("--output requires exactly one input file".into());
    }
    if args.files.iter().filter(|f| is_stdin(f)).count() > 1 {
        return Err("standard input can only be given once".into());
    }

    let config = resolve_config(global)?;
    let emitter = HarnessEmitter::new(config.harness_options());

    let outcomes: Vec<io::Result<Generated>> = args
        .files
        .par_iter()
        .map(|name| {
            let destination = destination_for(name, args, &config.output);
            generate_one(name, destination, &emitter)
        })
        .collect();

    let mut failures = 0usize;
    for (name, outcome) in args.files.iter().zip(outcomes) {
        match outcome {
            Ok(generated) => report(name, &generated, global),
            Err(e) => {
                eprintln!("error: {}: {e}", display_name(name));
                failures += 1;
            }
        }
    }

    if !global.quiet && args.files.len() > 1 {
        eprintln!(
            "   Finished {} testbench(es), {} failed",
            args.files.len() - failures,
            failures
        );
    }

    Ok(if failures == 0 { 0 } else { 1 })
}

/// Chooses the destination for one input.
///
/// `--stdout` wins, then `--output`; standard input otherwise goes to
/// standard output, and files get a sibling named by the output config.
pub(crate) fn destination_for(
    name: &str,
    args: &GenerateArgs,
    output: &OutputConfig,
) -> Destination {
    if args.stdout {
        Destination::Stdout
    } else if let Some(ref path) = args.output {
        Destination::File(PathBuf::from(path))
    } else if is_stdin(name) {
        Destination::Stdout
    } else {
        Destination::File(resolve_output_path(output, Path::new(name)))
    }
}

/// Reads, extracts, renders and (for file destinations) writes one testbench.
pub(crate) fn generate_one<C: Clock>(
    name: &str,
    destination: Destination,
    emitter: &HarnessEmitter<C>,
) -> io::Result<Generated> {
    let source = read_source(name)?;
    let desc = vtb_extract::extract(&source);
    let harness = emitter.emit(&desc);

    if let Destination::File(ref path) = destination {
        if !is_stdin(name) && is_same_file(path, Path::new(name)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("refusing to overwrite the input file {}", path.display()),
            ));
        }
        fs::write(path, &harness)?;
        debug!(input = name, output = %path.display(), "wrote testbench");
    }

    Ok(Generated {
        destination,
        anonymous: desc.is_anonymous(),
        harness,
    })
}

/// Prints the outcome of one successful generation.
fn report(name: &str, generated: &Generated, global: &GlobalArgs) {
    if generated.anonymous && !global.quiet {
        eprintln!(
            "warning: no entity declaration found in {}",
            display_name(name)
        );
    }
    match generated.destination {
        Destination::Stdout => println!("{}", generated.harness),
        Destination::File(ref path) => {
            if !global.quiet {
                eprintln!("   Generated {}", path.display());
            }
        }
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vtb_emit::{FixedClock, HarnessOptions};

    const COUNTER: &str = "entity counter is
    port (
        clk   : in  std_logic;
        count : out std_logic_vector(7 downto 0)
    );
end entity counter;
";

    fn emitter() -> HarnessEmitter<FixedClock> {
        let at = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        HarnessEmitter::with_clock(FixedClock(at), HarnessOptions::default())
    }

    fn args(files: &[&str], stdout: bool, output: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            files: files.iter().map(|f| f.to_string()).collect(),
            stdout,
            output: output.map(str::to_string),
        }
    }

    #[test]
    fn destination_defaults_to_sibling() {
        let a = args(&["rtl/counter.vhd"], false, None);
        assert_eq!(
            destination_for("rtl/counter.vhd", &a, &OutputConfig::default()),
            Destination::File(PathBuf::from("rtl/counter_tb.vhd"))
        );
    }

    #[test]
    fn destination_stdout_flag() {
        let a = args(&["counter.vhd"], true, None);
        assert_eq!(
            destination_for("counter.vhd", &a, &OutputConfig::default()),
            Destination::Stdout
        );
    }

    #[test]
    fn destination_explicit_output() {
        let a = args(&["counter.vhd"], false, Some("bench/top.vhd"));
        assert_eq!(
            destination_for("counter.vhd", &a, &OutputConfig::default()),
            Destination::File(PathBuf::from("bench/top.vhd"))
        );
    }

    #[test]
    fn destination_stdin_goes_to_stdout() {
        let a = args(&["-"], false, None);
        assert_eq!(
            destination_for("-", &a, &OutputConfig::default()),
            Destination::Stdout
        );
    }

    #[test]
    fn writes_sibling_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("counter.vhd");
        fs::write(&input, COUNTER).unwrap();
        let name = input.to_str().unwrap();
        let out = dir.path().join("counter_tb.vhd");

        let generated = generate_one(name, Destination::File(out.clone()), &emitter()).unwrap();
        assert!(!generated.anonymous);
        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, generated.harness);
        assert!(written.contains("entity counter_tb is"));
        assert!(written.contains("        clk_tb <= '0';"));
    }

    #[test]
    fn stdout_destination_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("counter.vhd");
        fs::write(&input, COUNTER).unwrap();

        let generated =
            generate_one(input.to_str().unwrap(), Destination::Stdout, &emitter()).unwrap();
        assert_eq!(generated.destination, Destination::Stdout);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_input_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.vhd");
        let err = generate_one(
            missing.to_str().unwrap(),
            Destination::File(dir.path().join("missing_tb.vhd")),
            &emitter(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!dir.path().join("missing_tb.vhd").exists());
    }

    #[test]
    fn refuses_to_overwrite_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("counter.vhd");
        fs::write(&input, COUNTER).unwrap();

        let err = generate_one(
            input.to_str().unwrap(),
            Destination::File(input.clone()),
            &emitter(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(fs::read_to_string(&input).unwrap(), COUNTER);
    }

    #[test]
    fn anonymous_input_still_generates() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("pkg.vhd");
        fs::write(&input, "package p is end package;").unwrap();

        let generated =
            generate_one(input.to_str().unwrap(), Destination::Stdout, &emitter()).unwrap();
        assert!(generated.anonymous);
        assert!(generated.harness.contains("entity _tb is"));
    }

    #[test]
    fn run_rejects_output_with_many_inputs() {
        let a = args(&["a.vhd", "b.vhd"], false, Some("x.vhd"));
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: None,
        };
        assert!(run(&a, &global).is_err());
    }

    #[test]
    fn run_rejects_stdin_twice() {
        let a = args(&["-", "-"], false, None);
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: None,
        };
        assert!(run(&a, &global).is_err());
    }

    #[test]
    fn run_reports_failure_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("counter.vhd");
        fs::write(&good, COUNTER).unwrap();
        let config = dir.path().join("vtb.toml");
        fs::write(&config, "").unwrap();
        let missing = dir.path().join("missing.vhd");

        let a = args(
            &[good.to_str().unwrap(), missing.to_str().unwrap()],
            false,
            None,
        );
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(config.to_string_lossy().into_owned()),
        };
        assert_eq!(run(&a, &global).unwrap(), 1);
        assert!(dir.path().join("counter_tb.vhd").exists());
    }
}
