//! rigid3d terminal inspector
//!
//! Prints the matrix produced by one rotation or transform builder.
//! Examples:
//!   - rigid3d-terminal euler 0.3 1.2 psi
//!   - rigid3d-terminal axis 0,0,1 1.5708
//!   - rigid3d-terminal transform 1,2,3 0 0 yaw
//!   - rigid3d-terminal point 1,0,0 0 0 1.5708 1,0,0

use std::env;
use std::io::{self, stdout};
use std::process;
use rigid3d_terminal::{Command, Inspector, USAGE};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("\n{}", USAGE);
            process::exit(2);
        }
    };

    let inspector = Inspector::default();
    inspector.run(&command, &mut stdout())?;

    Ok(())
}
