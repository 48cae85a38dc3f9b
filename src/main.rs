mod cli;
mod config;
mod layout;
mod ledger;
mod logging;
mod runner;
mod seed;
mod snapshot;
mod util;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
