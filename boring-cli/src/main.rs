//! Entry point for the `boring` command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    if let Err(err) = boring_cli::run() {
        eprintln!("boring: {err}");
        std::process::exit(1);
    }
}
