use std::process::ExitCode;

fn main() -> ExitCode {
    wikimap::cli::run()
}
