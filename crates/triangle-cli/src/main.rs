use clap::Parser as _;

fn main() {
    let cli = triangle_cli::cli::Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .init();

    std::process::exit(triangle_cli::run(&cli));
}
