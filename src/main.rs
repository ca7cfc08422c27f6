use std::{process::ExitCode, time::Duration};

use clap::Parser;
use log::{debug, error, info};
use printer_info::{
    config::{loading::load_config, models::Settings},
    monitor::PrinterMonitor,
    mqtt_client::{
        client::MqttClient,
        models::{printer_topic_id, MqttPrinterInformation},
    },
    status::StatusKeyMap,
};
use snafu::{ResultExt, Whatever};

use cli::{Cli, Commands};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    colog::init();
    let cli = Cli::parse();

    let settings = match load_config() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Could not load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let _sentry = settings.sentry_dsn.as_deref().filter(|dsn| !dsn.is_empty()).map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions { release: sentry::release_name!(), ..Default::default() }))
    });

    if settings.printer.uris.is_empty() {
        error!("No printers configured. Set PI_PRINTER_URIS to a comma separated list of printer URIs.");
        return ExitCode::FAILURE;
    }

    let key_map = StatusKeyMap::builder()
        .with_block_reasons()
        .with_printer_states()
        .overrides(&settings.messages)
        .build();
    let monitor = match PrinterMonitor::new(&settings.printer, key_map, settings.poll.max_retries) {
        Ok(monitor) => monitor,
        Err(e) => {
            error!("Invalid printer configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command.unwrap_or_default() {
        Commands::Monitor => run_monitor(&settings, &monitor).await,
        Commands::Show => show(&monitor).await,
        Commands::Dump => dump(&monitor).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", snafu::Report::from_error(e));
            ExitCode::FAILURE
        }
    }
}

async fn run_monitor(settings: &Settings, monitor: &PrinterMonitor) -> Result<(), Whatever> {
    let mqtt_client = settings.mqtt.enabled.then(|| MqttClient::new(&settings.mqtt));
    if mqtt_client.is_none() {
        info!("MQTT is disabled, printer information will only be logged.");
    }

    loop {
        for info in monitor.refresh_all().await {
            let topic = format!("{}/{}", settings.mqtt.root_topic, printer_topic_id(&info.uri));
            let payload = MqttPrinterInformation::from(&info);
            let json = serde_json::to_string(&payload).whatever_context("Could not serialize printer information")?;
            debug!("{}: {}", topic, json);

            match &mqtt_client {
                Some(client) => {
                    let fingerprint = payload.fingerprint().whatever_context("Could not serialize printer information")?;
                    if let Err(e) = client.publish_if_changed(&topic, fingerprint, json.as_bytes()) {
                        error!("Error publishing printer information to MQTT: {}", snafu::Report::from_error(e));
                    }
                }
                None => info!("{}: {}", info.uri, info.status_lines.iter().cloned().collect::<Vec<_>>().join(", ")),
            }
        }

        let wait = settings.poll.schedule.get_duration_till_next_occurrence().unwrap_or_else(|e| {
            error!("{e}, waiting 30 seconds before polling again.");
            Duration::from_secs(30)
        });
        tokio::time::sleep(wait).await;
    }
}

async fn show(monitor: &PrinterMonitor) -> Result<(), Whatever> {
    let payloads: Vec<MqttPrinterInformation> =
        monitor.refresh_all().await.iter().map(MqttPrinterInformation::from).collect();
    let json = serde_json::to_string_pretty(&payloads).whatever_context("Could not serialize printer information")?;
    println!("{json}");
    Ok(())
}

async fn dump(monitor: &PrinterMonitor) -> Result<(), Whatever> {
    for endpoint in monitor.endpoints() {
        endpoint
            .dump_printer_attributes()
            .await
            .with_whatever_context(|_| format!("Could not dump attributes of {}", endpoint.uri))?;
    }
    Ok(())
}
