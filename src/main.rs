use custos::cli::app::CustosCli;
use custos::error::AppError;
use custos::tracing::init_logging;

fn main() -> Result<(), AppError> {
    init_logging();
    log::info!("(log) Custos lancé");
    tracing::info!("(tracing) Application prête");

    let cli = CustosCli::new()?;
    cli.run()
}
