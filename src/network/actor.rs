//! Network actor - runs backend calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, fetch_devices, fetch_quote};

/// Network actor that turns commands into HTTP calls.
///
/// Every call is spawned and reported independently: no cancellation, no
/// retry. Ordering of completions is the App layer's concern.
pub struct NetworkActor {
    client: reqwest::Client,
    config: Config,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: Config, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(&config),
            config,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchDevices { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let config = self.config.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, base = %config.base_url(), "Fetching devices");
                                let result = fetch_devices(&client, &config).await;
                                let response = NetworkResponse::Devices { id, result };
                                tracing::info!(
                                    id,
                                    ok = response.is_success(),
                                    "Device fetch completed"
                                );
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::RequestQuote { id, selection }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let config = self.config.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(
                                    id,
                                    brand = %selection.brand,
                                    model = %selection.model,
                                    storage = selection.storage,
                                    condition = %selection.condition,
                                    "Requesting quote"
                                );
                                let result = fetch_quote(&client, &config, &selection).await;
                                let response = NetworkResponse::Quote { id, result };
                                tracing::info!(
                                    id,
                                    ok = response.is_success(),
                                    "Quote request completed"
                                );
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
