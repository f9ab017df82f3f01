mod platform;

fn main() {
    if let Err(err) = platform::run_app() {
        eprintln!("jobscout failed to start: {err}");
        std::process::exit(1);
    }
}
