use anyhow::{Context, Result};

use dialflow::audio::create_provider;
use dialflow::comms::scanner::open_port;
use dialflow::comms::transport::SerialTransport;
use dialflow::driver::Driver;
use dialflow::utils::config::load_config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    log::info!("─── dialflow v{} starting ───", env!("CARGO_PKG_VERSION"));

    let cfg = load_config();
    log::info!(
        "Config: port={}, baud={}, timeout={}ms",
        cfg.port.as_deref().unwrap_or("auto"),
        cfg.baud_rate,
        cfg.read_timeout_ms
    );

    let provider = create_provider().context("Cannot reach the audio system")?;
    let port = open_port(&cfg).context("Cannot open the controller's serial port")?;

    log::info!("Listening for the controller... (Ctrl+C to exit)");
    let mut driver = Driver::new(provider, SerialTransport::new(port), cfg.read_timeout());
    driver.run().context("Lost the controller")?;

    Ok(())
}
