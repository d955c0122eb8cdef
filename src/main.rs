//! qcgrid main entrypoint.

use qcgrid::run;
use qcgrid::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
