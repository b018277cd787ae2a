//! rDutyCheck main entrypoint.

use rdutycheck::run;
use rdutycheck::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
