use blink_clip::config::{Config, Secrets};
use blink_clip::constants::DEFAULT_FILENAME;
use blink_clip::{Authentication, BlinkClient, VideoManagement};
use clap::Parser;
use std::process;
use tracing::{debug, info, warn};

/// Downloads the most recent clip for the configured Blink camera.
#[derive(Parser)]
#[clap(version, about)]
struct Args {
    /// Output filename, created under the configured save directory
    #[clap(default_value = DEFAULT_FILENAME)]
    filename: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        eprintln!("{}", err);
        process::exit(1);
    }
}

async fn run() -> blink_clip::Result<()> {
    let args = Args::parse();
    debug!(filename = %args.filename, "provided filename");

    let config = Config::from_env()?;
    let secrets = Secrets::load(&config.secrets_path)?;

    let mut client = BlinkClient::new(secrets.username, secrets.password);
    client.login().await?;

    let found = client
        .wait_for_video(&config.camera_name, config.go_back, config.wait_timeout)
        .await?;

    // Giving up without a clip is a normal outcome. Callers check for the
    // output file, not the exit code.
    let Some(video) = found else {
        warn!(camera = %config.camera_name, "no video appeared before the timeout");
        return Ok(());
    };

    let target = config.video_save_path.join(&args.filename);
    client.save_video(&video.address, &target).await?;
    info!(path = %target.display(), "file saved");

    Ok(())
}
