mod cli;
mod repl;
mod rlpl;
mod rppl;

use std::path::PathBuf;

use clap::Parser;
use mlang_core::eval::{run, run_from_stream};

#[derive(Parser)]
enum Command {
    /// Parses and evaluates a source file
    Run {
        /// Path of source file
        path: PathBuf,
        /// Lex the file as a character stream instead of loading it whole
        #[arg(long, default_value_t = false)]
        stream: bool,
    },
    /// Runs the interactive Read Eval Print Loop
    Repl,
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl
}

fn main() {
    match Command::parse() {
        Command::Run { path, stream } => {
            cli::print_running(&path.to_string_lossy());

            let result = if stream {
                run_from_stream(path)
            } else {
                run(path)
            };

            match result {
                Ok(value) => {
                    // the final value is discarded, but a runtime error
                    // still deserves to be seen
                    if value.is_error() {
                        eprintln!("{value}");
                    }
                },
                Err(err) => {
                    let buf_writer = cli::stderr_buffer_writer();
                    let mut buf = buf_writer.buffer();

                    err.pretty(&mut buf);
                    buf_writer
                        .print(&buf)
                        .expect("Writing errors to stderr");
                }
            }
        },
        Command::Repl => {
            let _ = repl::start();
        },
        Command::Rlpl => {
            let _ = rlpl::start();
        },
        Command::Rppl => {
            let _ = rppl::start();
        }
    }
}
