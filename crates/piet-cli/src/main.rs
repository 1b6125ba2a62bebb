//! Piet command-line runner.
//!
//! Decodes one image file (PNG/GIF/JPEG) into a codel grid and runs it
//! against the process standard streams. Exit code 1 on usage errors,
//! decode failures, and fatal runtime errors.

use piet_interp::{Grid, Interpreter, TraceEvent, Tracer};
use piet_types::Rgb;
use std::cell::Cell;
use std::io::{self, Write};
use std::process;
use std::rc::Rc;

fn print_usage() {
    eprintln!("Usage: piet [options] <image-file>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -v, --verbose    Trace each step to stderr");
    eprintln!("  --trace-json     Trace each step as JSON lines to stderr");
    eprintln!("  -h, --help       Show this help");
}

/// Renders trace events as human-readable lines on stderr.
struct StderrTracer;

impl Tracer for StderrTracer {
    fn record(&mut self, event: &TraceEvent) {
        eprintln!("{event}");
    }
}

/// Renders trace events as one JSON object per line on stderr.
struct JsonTracer;

impl Tracer for JsonTracer {
    fn record(&mut self, event: &TraceEvent) {
        if let Ok(line) = serde_json::to_string(event) {
            eprintln!("{line}");
        }
    }
}

/// Stdout wrapper that remembers the last byte written, so the runner can
/// add a trailing newline iff the program's own output lacked one.
struct GuardedStdout {
    inner: io::Stdout,
    last: Rc<Cell<Option<u8>>>,
}

impl Write for GuardedStdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        if written > 0 {
            self.last.set(Some(buf[written - 1]));
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn decode_grid(path: &str) -> Result<Grid, String> {
    let img = image::open(path)
        .map_err(|e| format!("cannot decode {path}: {e}"))?
        .to_rgb8();
    let (width, height) = img.dimensions();
    Grid::from_fn(width, height, |x, y| {
        let p = img.get_pixel(x, y);
        Rgb::new(p[0], p[1], p[2])
    })
    .map_err(|e| format!("cannot build grid from {path}: {e}"))
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut verbose = false;
    let mut trace_json = false;
    let mut file = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "--trace-json" => trace_json = true,
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ if arg.starts_with('-') => {
                eprintln!("unknown option: {arg}");
                print_usage();
                process::exit(1);
            }
            _ => {
                if file.replace(arg.as_str()).is_some() {
                    print_usage();
                    process::exit(1);
                }
            }
        }
    }
    let Some(path) = file else {
        print_usage();
        process::exit(1);
    };

    let grid = match decode_grid(path) {
        Ok(grid) => grid,
        Err(message) => {
            eprintln!("{message}");
            process::exit(1);
        }
    };

    let last = Rc::new(Cell::new(None));
    let output = GuardedStdout {
        inner: io::stdout(),
        last: Rc::clone(&last),
    };
    let mut interp = Interpreter::new(grid).with_output(output);
    if trace_json {
        interp = interp.with_tracer(JsonTracer);
    } else if verbose {
        interp = interp.with_tracer(StderrTracer);
    }

    if let Err(e) = interp.run() {
        eprintln!("piet: {e}");
        process::exit(1);
    }

    // In case the Piet program's output didn't end with a newline.
    if last.get() != Some(b'\n') {
        println!();
    }
}
