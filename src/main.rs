use clap::Parser;
use ripe_ip_check::cli::Args;
use ripe_ip_check::output::format_verdict;
use ripe_ip_check::run_check;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).ok();

    let args = Args::parse();
    println!("IPv4 Address Provided: {}", args.ipv4);

    println!("Checking if CIDR data on webpage is available, then requesting data...");
    println!("   > there's a lot of data, it may take a minute");

    match run_check(args.ipv4) {
        Ok(verdict) => {
            println!("CIDR data successfully captured.");
            println!("{}", format_verdict(args.ipv4, &verdict));
        }
        Err(e) => {
            log::error!("retrieval failed: {e}");
            eprintln!("{e}\nPlease try again.");
            std::process::exit(1);
        }
    }
}
