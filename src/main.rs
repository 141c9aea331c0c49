use anyhow::Context;
use quote_pricing::preview::{build_table, load_catalog, load_template};
use quote_pricing::{config::Config, EditingSession};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("Preview failed: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let catalog = load_catalog(config).context("loading province catalog")?;
    let template = load_template(config)
        .with_context(|| format!("reading {}", config.document_path.display()))?;

    let session = EditingSession::from_template(&template, &catalog.region_catalog())
        .context("opening price document")?;
    let (template_type, configuration) = session.finish().context("validating price document")?;

    tracing::info!(
        template_type = %template_type,
        provinces = catalog.provinces().len(),
        "Resolving preview table"
    );

    let rows = build_table(
        &configuration,
        &catalog,
        &config.preview_weights,
        &config.preview_provinces,
    );
    for row in &rows {
        match &row.result {
            Ok(_) => println!("{}", serde_json::to_string(row)?),
            Err(e) => {
                tracing::warn!(weight = %row.weight, province = %row.province, error = %e, "Unresolved")
            }
        }
    }
    Ok(())
}
