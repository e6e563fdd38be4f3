use backon::{ExponentialBuilder, Retryable};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use solana_sdk::pubkey::Pubkey;
use std::{error::Error, str, str::FromStr, time::Duration};

pub fn parse_pubkey(input: &str) -> Option<Pubkey> {
    if input.len() < 43 || input.len() > 44 {
        return None;
    }

    Pubkey::from_str(input).ok()
}

pub fn print_error(e: eyre::Report) {
    eprintln!("\nError: {e:?}\n");
}

pub async fn get_public_ipv4() -> Result<String, Box<dyn Error>> {
    let client = Client::builder().timeout(Duration::from_secs(5)).build()?;
    let policy = default_retry_policy();
    get_public_ipv4_with_policy(&client, "https://ifconfig.me/ip", policy).await
}

fn default_retry_policy() -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_min_delay(Duration::from_millis(200))
        .with_max_delay(Duration::from_secs(3))
        .with_max_times(5)
}

pub async fn get_public_ipv4_with_policy(
    client: &Client,
    url: &str,
    policy: ExponentialBuilder,
) -> Result<String, Box<dyn Error>> {
    (|| async {
        let r = client
            .get(url)
            .header("User-Agent", "curl/8.0")
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {e}"))?;
        if !r.status().is_success() {
            return Err(format!("Received non-success status: {}", r.status()).into());
        }
        let text = r
            .text()
            .await
            .map_err(|e| format!("Failed to read response body: {e}"))?;
        let ip = text.trim();
        if ip.is_empty() {
            return Err("Empty IP response from server".into());
        }
        Ok::<_, Box<dyn Error>>(ip.to_string())
    })
    .retry(&policy)
    .await
}

pub fn init_command(len: u64) -> ProgressBar {
    let spinner = ProgressBar::new(len);

    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("Failed to set template")
            .progress_chars("#>-")
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    spinner.println("DoubleZero Service Provisioning");

    spinner
}
