use aws_ec2_list::args::Args;
use aws_ec2_list::logging;
use clap::Parser;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    logging::init()?;
    //
    log::info!("#Start main()");

    let args = Args::parse();
    let exit_code = aws_ec2_list::execute(&args).await?;

    log::info!("#End main() exit_code={exit_code}");
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
// cargo watch -x 'fmt' -x 'run -- default'
