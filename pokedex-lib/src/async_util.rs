//! Drive a task while following a controller's published state.
//!
//! Front ends use this to keep a spinner or status line in sync with a
//! screen's `watch` channel while waiting on a fetch.

use std::future::Future;

use tokio::sync::watch;

/// Run `task` to completion, calling `on_update` with each state published
/// on `updates` in the meantime, and once more afterwards if the task's own
/// final write has not been seen yet.
///
/// Intermediate states can be skipped: a `watch` channel only keeps the
/// latest value.
pub async fn run_with_updates<F, T, R>(
    task: F,
    mut updates: watch::Receiver<T>,
    mut on_update: impl FnMut(&T),
) -> R
where
    F: Future<Output = R>,
{
    tokio::pin!(task);
    let mut update_count: u64 = 0;
    let mut watching = true;

    let result = loop {
        tokio::select! {
            r = &mut task => break r,
            changed = updates.changed(), if watching => {
                match changed {
                    Ok(()) => {
                        update_count += 1;
                        on_update(&updates.borrow_and_update());
                    }
                    // Publisher dropped; nothing more will arrive.
                    Err(_) => {
                        log::debug!("run_with_updates: publisher closed ({} updates)", update_count);
                        watching = false;
                    }
                }
            }
        }
    };

    // Checked on the borrow rather than the receiver: the publisher may
    // already be dropped with its last value unseen.
    let latest = updates.borrow_and_update();
    if latest.has_changed() {
        update_count += 1;
        on_update(&latest);
    }
    drop(latest);
    log::debug!("run_with_updates: task completed ({} updates)", update_count);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_final_value() {
        let (tx, rx) = watch::channel(0u32);
        let mut seen = Vec::new();
        let out = run_with_updates(
            async move {
                tx.send_replace(7);
                "done"
            },
            rx,
            |v| seen.push(*v),
        )
        .await;
        assert_eq!(out, "done");
        assert_eq!(seen.last(), Some(&7));
    }

    #[tokio::test]
    async fn no_updates_when_nothing_changes() {
        let (_tx, rx) = watch::channel(0u32);
        let mut calls = 0;
        run_with_updates(async {}, rx, |_| calls += 1).await;
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn survives_publisher_drop() {
        let (tx, rx) = watch::channel(0u32);
        drop(tx);
        let out = run_with_updates(async { 3 }, rx, |_| {}).await;
        assert_eq!(out, 3);
    }
}
