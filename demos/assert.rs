//! The first assertion holds; the second logs an error and exits with status 1.

fn main() {
    clog::clog_assert!(2 + 2 == 4);
    clog::clog_assert!(2 + 2 == 5);

    clog::info!("Never reached.");
}
