use anyhow::Context;
use mdc::domain::constants::SERVICE_NAME;
use mdc::kernel::config::load_config;
use mdc_logger::Logger;
use mdc_server::Server;

#[mdc_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(SERVICE_NAME).init()?;

    let cfg = load_config(Some("server")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
