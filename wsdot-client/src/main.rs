use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use wsdot_client::domain::LineSegment;
use wsdot_client::traffic::{TrafficClient, TrafficConfig};
use wsdot_client::transport::{ReqwestTransport, Transport};
use wsdot_client::wsf::{TerminalQueryType, WsfClient, WsfConfig};

/// Environment variable holding the Traveler Information API access code.
const ACCESS_CODE_VAR: &str = "WSDOT_TRAFFIC_API_CODE";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let access_code = std::env::var(ACCESS_CODE_VAR).unwrap_or_else(|_| {
        eprintln!("Warning: {ACCESS_CODE_VAR} not set. API calls will fail.");
        String::new()
    });

    let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new()?);

    let traffic = TrafficClient::new(TrafficConfig::new(&access_code), transport.clone());
    let alerts = traffic.get_alerts(true).await?;
    let located = alerts
        .iter()
        .filter(|a| a.route_location().is_some())
        .count();
    info!(alerts = alerts.len(), located, "fetched highway alerts");

    let wsf = WsfClient::new(WsfConfig::new(&access_code), transport);
    let flush_date = wsf.cache_flush_date().await?;
    info!(%flush_date, "WSF cache flush date");

    for query_type in TerminalQueryType::ALL {
        let terminals = wsf.query(query_type).await?;
        info!(%query_type, terminals = terminals.len(), "queried terminals");
    }

    println!("{} alerts, {} with route geometry", alerts.len(), located);
    Ok(())
}
