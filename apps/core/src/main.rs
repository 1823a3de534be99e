// Hades Entry Point
// Interactive shell around the rule-based brain

use std::io::Write;

use anyhow::Context;
use hades_core::brain::Responder;
use hades_core::config::HadesConfig;
use hades_core::{logging, persona, AppError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = HadesConfig::load().context("Failed to load configuration")?;
    logging::init(&config).context("Failed to initialize logging")?;
    info!(
        name = %config.name,
        log_format = %config.log_format,
        "Starting {} shell",
        persona::NAME
    );

    let responder = Responder::new();
    let mut json_output = false;

    println!("{}\n", persona::banner(&config.name));
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/prompt" => println!("{}\n", persona::system_prompt()),
            "/json" => {
                json_output = !json_output;
                println!("JSON: {}\n", if json_output { "on" } else { "off" });
            }
            _ => match responder.handle(&line) {
                Ok(turn) => {
                    let delay = config.think_delay(&mut rand::thread_rng());
                    tokio::time::sleep(delay).await;

                    if json_output {
                        println!("{}\n", serde_json::to_string_pretty(&turn)?);
                    } else {
                        println!("{}: {}\n", config.name, turn.response);
                    }
                }
                Err(AppError::Validation(msg)) => println!("{}\n", msg),
                Err(e) => error!("Failed to handle message: {}", e),
            },
        }
        prompt()?;
    }

    info!("Input closed, shutting down");
    Ok(())
}
