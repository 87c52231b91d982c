//! Writes the placeholder icon set into `./icons`.

use iconbatch::{GeneratorConfig, IconGenerator, report_completion};

fn main() {
    let config = GeneratorConfig::default();
    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    match IconGenerator::new(config).run() {
        Ok(report) => {
            log::debug!("Files written: {:?}", report.files_created);
            report_completion();
        }
        Err(e) => {
            eprintln!("Icon generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
