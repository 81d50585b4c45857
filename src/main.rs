use std::process::ExitCode;

fn main() -> ExitCode {
    oops::cli::main()
}
