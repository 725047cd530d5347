//! rWorkTracker main entrypoint.

use rworktracker::run;
use rworktracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
