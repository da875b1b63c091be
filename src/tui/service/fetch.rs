use crate::catalog::{load_or_empty, CategorySource};
use crate::model::Category;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use tokio::runtime::Handle;

/// Starts the one-shot category load on `runtime`. The result arrives on the returned channel.
pub fn start_fetch(runtime: &Handle, source: Box<dyn CategorySource>) -> Receiver<Vec<Category>> {
    let (tx, rx) = channel();

    runtime.spawn(async move {
        let categories = load_or_empty(source.as_ref()).await;
        if tx.send(categories).is_err() {
            log::debug!("Category load finished after the browser closed; result discarded");
        }
    });

    rx
}

/// Moves a finished load into `categories`. Returns true when new data arrived.
pub fn poll_fetch(
    receiver: &mut Option<Receiver<Vec<Category>>>,
    categories: &mut Vec<Category>,
) -> bool {
    let Some(rx) = receiver.as_ref() else {
        return false;
    };

    match rx.try_recv() {
        Ok(loaded) => {
            *categories = loaded;
            *receiver = None;
            true
        }
        Err(TryRecvError::Empty) => false,
        Err(TryRecvError::Disconnected) => {
            *receiver = None;
            false
        }
    }
}
