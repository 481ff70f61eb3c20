//! Turns off automatic line terminators and supplies them by hand.

fn main() {
    clog::info!("With a newline.");

    clog::global::set_append_newline(false);
    clog::info!("Without one, ");
    clog::info!("so records run together.\n");

    clog::global::set_append_newline(true);
    clog::info!("Back to normal.");
}
