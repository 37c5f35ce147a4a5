use panelkit::init_logging;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    panelkit::cli::run_from_env()
}
