//! Logs at every level, then repeats with a threshold and a log file.
//!
//! Run with `cargo run --example basic`; the file lands in `basic.log`.

use clog::Level;

fn main() {
    clog::debug!("Debug message, number {}", 1);
    clog::info!("Info message, string {:?}", "two");
    clog::warn!("Warning message, float {:.2}", 3.0);
    clog::error!("Error message, char {}", '4');

    clog::global::set_min_level(Level::Info);
    clog::global::set_output_file("basic.log");

    clog::debug!("Not shown: below the threshold.");
    clog::info!("Shown on the console and written to basic.log.");
    clog::log!(Level::Error, "Errors go to {}.", "stderr");

    clog::global::shutdown();
}
