//! rcampus main entrypoint.

use rcampus::run;
use rcampus::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
