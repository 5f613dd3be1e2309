use clap::Parser;

fn main() {
    let cli = rfml::cli::Cli::parse();
    match rfml::cli::run(&cli, &rfml::demo::suite()) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("rfml failed: {:#}", e);
            std::process::exit(2);
        }
    }
}
