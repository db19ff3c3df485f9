use clap::Parser;
use riderforge::utils::{logger, validation::Validate};
use riderforge::{CliConfig, RiderDocument, RiderGenerator, Roster, StageGeometry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting riderforge CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let roster = load_roster(&config.roster)?;
    let geometry = match &config.geometry {
        Some(path) => StageGeometry::from_file(path)?,
        None => StageGeometry::default(),
    };

    let generator = RiderGenerator::with_geometry(geometry);

    match generator.generate(&roster, config.rider_type, config.options()) {
        Ok(document) => emit(&document, &config)?,
        Err(e) => {
            tracing::error!("Rider generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn load_roster(path: &str) -> riderforge::Result<Roster> {
    let content = std::fs::read_to_string(path)?;
    if path.ends_with(".toml") {
        Ok(toml::from_str(&content)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

fn emit(document: &RiderDocument, config: &CliConfig) -> riderforge::Result<()> {
    let json = if config.pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };

    match &config.output {
        Some(path) => {
            std::fs::write(path, json)?;
            tracing::info!("Rider written to {}", path);
            println!("✅ {}", document.name);
            println!("📁 Output saved to: {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
