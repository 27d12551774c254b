//! moodtasker main entrypoint.

use moodtasker::run;
use moodtasker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
