//! fitpaper command-line entry point.

fn main() {
    if let Err(err) = fitpaper_lib::cli::run() {
        eprintln!("fitpaper: {err}");
        std::process::exit(1);
    }
}
