use harmock_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; never let it block the tool.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli::run_from_args() {
        eprintln!("harmock error: {:#}", err);
        std::process::exit(1);
    }
}
