use clap::Parser;
use gh2bb::{gh2bb_main, Gh2bbCli};
use std::process::exit;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv::dotenv().ok();
    let args = Gh2bbCli::parse();
    env_logger::builder()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_target(false)
        .format_timestamp(None)
        .init();
    match gh2bb_main(args).await {
        Ok(_) => {
            exit(0);
        }
        Err(e) => {
            log::error!("Error: {e}");
            exit(1);
        }
    };
}
