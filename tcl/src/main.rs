use std::process::ExitCode;

use tcl_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    tcl_driver::run(argument)
}
