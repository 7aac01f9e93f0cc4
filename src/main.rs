fn main() {
    #[cfg(feature = "cli")]
    sensorpack::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("sensorpack: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
