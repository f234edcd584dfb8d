use crate::config::default_workers;
use crate::engine::{TransferService, TransferSummary};
use crate::models::{AccountError, AccountRow, TransferRequest};
use crate::notifications::NotificationSink;
use crate::storage::{AccountStorage, Storage};
use csv::{Reader, ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::{spawn_blocking, JoinError, JoinHandle, JoinSet};
use tracing::{error, info, warn};

/// Loads accounts and runs a stream of transfer requests against them concurrently.
pub struct AsyncEngine {
    storage: Arc<AccountStorage>,
    service: Arc<TransferService<AccountStorage>>,
    backpressure: usize,
    workers: usize
}

impl AsyncEngine {
    /// Creates a new engine instance with the provided storage and notification sink.
    pub fn new(storage: Arc<AccountStorage>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            service: Arc::new(TransferService::new(storage.clone(), notifier)),
            storage,
            backpressure: 256,
            workers: default_workers()
        }
    }

    /// Caps the number of transfers in flight. With a single worker, transfers
    /// run one at a time in input order.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn service(&self) -> Arc<TransferService<AccountStorage>> {
        self.service.clone()
    }

    /// Registers every account from `accounts_path`, then executes every transfer from `transfers_path`.
    pub async fn run(&self, accounts_path: &str, transfers_path: &str) -> anyhow::Result<TransferSummary> {
        let registered = self.load_accounts(accounts_path.to_string()).await?;
        info!("Registered {registered} accounts");

        let (sender, receiver) = mpsc::channel::<TransferRequest>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(transfers_path.to_string(), sender);
        let processing_result = self.process_transfers(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        processing_result
    }

    async fn load_accounts(&self, path: String) -> anyhow::Result<usize> {
        let storage = self.storage.clone();

        let registered = spawn_blocking(move || {
            let Some(mut reader) = open_csv(&path) else {
                return 0
            };

            let mut registered = 0;

            for result in reader.deserialize::<AccountRow>() {
                match result {
                    Ok(row) => match storage.register(&row.account_id, row.balance) {
                        Ok(_) => registered += 1,
                        Err(error) => warn!("{error}")
                    },
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }

            registered
        }).await?;

        Ok(registered)
    }

    fn spawn_csv_reader(&self, path: String, sender: mpsc::Sender<TransferRequest>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let Some(mut reader) = open_csv(&path) else {
                return
            };

            for result in reader.deserialize::<TransferRequest>() {
                match result {
                    Ok(request) => {
                        if sender.blocking_send(request).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }
        })
    }

    async fn process_transfers(&self, mut receiver: mpsc::Receiver<TransferRequest>) -> anyhow::Result<TransferSummary> {
        let permits = Arc::new(Semaphore::new(self.workers));
        let mut tasks = JoinSet::new();
        let mut summary = TransferSummary::default();

        while let Some(request) = receiver.recv().await {
            let permit = permits.clone().acquire_owned().await?;
            let service = self.service.clone();

            tasks.spawn_blocking(move || {
                let outcome = service.transfer(&request);
                drop(permit);
                outcome
            });

            while let Some(result) = tasks.try_join_next() {
                record(&mut summary, result);
            }
        }

        //NOTE: Wait for every in-flight transfer before reporting
        while let Some(result) = tasks.join_next().await {
            record(&mut summary, result);
        }

        Ok(summary)
    }
}

fn record(summary: &mut TransferSummary, result: Result<Result<(), AccountError>, JoinError>) {
    match result {
        Ok(outcome) => summary.record(&outcome),
        Err(error) => error!("A transfer worker did not complete: {error}")
    }
}

fn open_csv(path: &str) -> Option<Reader<BufReader<File>>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) => {
            error!("Error opening CSV at path: {path} | {error}");
            return None;
        }
    };

    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    Some(reader)
}
