use std::any::Any;

use budgify_core::errors::{Error, Result};
use diesel::SqliteConnection;
use log::error;
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;

type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;
type BoxedAny = Box<dyn Any + Send + 'static>;
type Envelope = (Job<BoxedAny>, oneshot::Sender<Result<BoxedAny>>);

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Envelope>,
}

impl WriteHandle {
    /// Runs `job` on the writer's dedicated connection inside an immediate
    /// transaction. Jobs are executed one at a time in submission order.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as BoxedAny)),
                ret_tx,
            ))
            .await
            .map_err(|_| Error::Unexpected("database writer has stopped".to_string()))?;

        let boxed = ret_rx
            .await
            .map_err(|_| Error::Unexpected("database writer dropped the reply".to_string()))??;

        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| Error::Unexpected("database writer returned an unexpected type".to_string()))
    }
}

/// Spawns a background task that owns one pooled connection and applies
/// write jobs serially.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<Envelope>(1024);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                // Dropping the receiver makes every later exec fail instead of hanging.
                error!("Writer actor could not acquire a connection: {}", e);
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            let mut job_error: Option<Error> = None;
            let result: Result<BoxedAny> = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(|e| {
                        let rollback = StorageError::CoreError(e.to_string());
                        job_error = Some(e);
                        rollback
                    })
                })
                .map_err(|e| job_error.take().unwrap_or_else(|| e.into()));

            // Receiver may have gone away if the request was cancelled.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
