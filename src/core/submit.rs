// src/core/submit.rs

use crate::app::{App, Message, Settlement, SubmitRejection};
use crate::core::client::ValidationClient;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Runs the submit action against `app`.
///
/// When the widget accepts the submission the upload is spawned onto the
/// runtime and its settlement is delivered through `tx`. A rejected submit
/// (no file, or one already in flight) sends nothing over the network.
pub fn dispatch_submit(
    app: &mut App,
    client: &ValidationClient,
    tx: &mpsc::Sender<Message>,
) -> Result<JoinHandle<()>, SubmitRejection> {
    let submission = app.begin_submit()?;
    let client = client.clone();
    let tx = tx.clone();

    Ok(tokio::spawn(async move {
        let outcome = client.validate(&submission.file).await;
        let settlement = Settlement { ticket: submission.ticket, outcome };
        if tx.send(Message::Settled(settlement)).await.is_err() {
            debug!(ticket = submission.ticket, "UI loop gone before the upload settled.");
        }
    }))
}

/// Probes the backend once and reports its status through `tx`.
pub fn spawn_probe(client: &ValidationClient, tx: &mpsc::Sender<Message>) -> JoinHandle<()> {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let status = client.probe().await;
        let _ = tx.send(Message::Probed(status)).await;
    })
}
