use backon::{BlockingRetryable, ExponentialBuilder};
use doublezero_cli::helpers::get_public_ipv4;
use indicatif::ProgressBar;
use std::{net::Ipv4Addr, time::Duration};

pub async fn look_for_ip(
    client_ip: &Option<String>,
    spinner: &ProgressBar,
) -> eyre::Result<(Ipv4Addr, String)> {
    look_for_ip_with(client_ip, spinner, get_public_ipv4).await
}

async fn look_for_ip_with(
    client_ip: &Option<String>,
    spinner: &ProgressBar,
    ip_fetch_func: impl FnMut() -> eyre::Result<String, Box<dyn std::error::Error>>,
) -> eyre::Result<(Ipv4Addr, String)> {
    let client_ip = match client_ip {
        Some(ip) => {
            spinner.println(format!("    Using Public IP: {ip}"));
            ip
        }
        None => &{
            spinner.set_message("Discovering your public IP...");

            let builder = ExponentialBuilder::new()
                .with_max_times(3)
                .with_min_delay(Duration::from_secs(1));

            let ipv4 = ip_fetch_func
                .retry(builder)
                .notify(|_, dur| {
                    spinner.set_message(format!("Fetching IP Address (checking in {dur:?})..."))
                })
                .call()
                .map_err(|_| eyre::eyre!("Timeout waiting for IP address"));

            match ipv4 {
                Ok(ip) => {
                    spinner.println(format!("Public IP detected: {ip} - If you want to use a different IP, you can specify it with `--client-ip x.x.x.x`"));
                    ip
                }
                Err(e) => {
                    eyre::bail!("Could not detect your public IP. Please provide the `--client-ip` argument. ({})", e.to_string());
                }
            }
        },
    };

    let ip: Ipv4Addr = client_ip
        .parse()
        .map_err(|_| eyre::eyre!("Invalid IPv4 address format: {}", client_ip))?;

    Ok((ip, client_ip.to_string()))
}
