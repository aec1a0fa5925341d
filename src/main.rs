use anyhow::{Context, Result};
use taskaz::config::Config;
use taskaz::logger::Logger;
use taskaz::ui::{self, Route};

const USAGE: &str = "Usage: taskaz [--init-config] [ROUTE]

  ROUTE          Page to open: \"/\" (default) or \"/task-lists/{id}\"
  --init-config  Write a default configuration file and exit

Environment:
  TASKAZ_API_URL  Overrides api.base_url from the configuration file";

#[tokio::main]
async fn main() -> Result<()> {
    let mut route_arg = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--init-config" => {
                let path = Config::get_default_config_path()?;
                Config::generate_default_config(&path)?;
                return Ok(());
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            path => {
                if route_arg.is_some() {
                    eprintln!("❌ Error: unexpected argument '{}'\n\n{}", path, USAGE);
                    std::process::exit(2);
                }
                route_arg = Some(path.to_string());
            }
        }
    }

    let config = Config::load()?;

    let route = match route_arg {
        Some(path) => Route::parse(&path).with_context(|| format!("Invalid route '{}'", path))?,
        None => config.start_route()?,
    };

    let logger = Logger::from_config(&config.logging)?;
    logger.install(config.log_level()?)?;
    log::info!("Starting Taskaz at {}", route);

    ui::run_app(&config, logger, route).await
}
