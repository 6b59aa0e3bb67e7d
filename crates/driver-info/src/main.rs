use clap::Parser;

#[tokio::main]
async fn main() {
    let args = driver_info::arguments::Arguments::parse();
    observe::tracing::initialize(args.log_filter.as_str());
    tracing::info!("running driver-info with validated arguments:\n{}", args);
    driver_info::run(args).await;
}
