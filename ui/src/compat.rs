// Re-export the platform implementation
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

use thiserror::Error;

/// The dashboard has nowhere to attach.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("no browser window or document is available")]
    NoDocument,
    #[error("mount point element #{0} was not found in the document")]
    MissingElement(String),
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use super::MountError;

    pub mod interval {
        use futures::channel::mpsc;
        use futures::StreamExt;
        use std::time::Duration;

        /// A repeating browser timer. The timer is cancelled when this is dropped.
        pub struct Interval {
            inner: Option<gloo_timers::callback::Interval>,
            rx: mpsc::UnboundedReceiver<()>,
        }

        impl Interval {
            /// The first tick completes one full `duration` after creation.
            pub fn new(duration: Duration) -> Self {
                let (tx, rx) = mpsc::unbounded();
                let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
                let gloo_interval = gloo_timers::callback::Interval::new(millis, move || {
                    let _ = tx.unbounded_send(());
                });

                Self {
                    inner: Some(gloo_interval),
                    rx,
                }
            }

            pub async fn tick(&mut self) {
                let _ = self.rx.next().await;
            }
        }

        impl Drop for Interval {
            fn drop(&mut self) {
                if let Some(inner) = self.inner.take() {
                    inner.cancel();
                }
            }
        }
    }

    /// Checks that the document contains the element the app mounts into.
    pub fn require_mount_point(id: &str) -> Result<(), MountError> {
        let document = web_sys::window()
            .and_then(|win| win.document())
            .ok_or(MountError::NoDocument)?;

        match document.get_element_by_id(id) {
            Some(_) => Ok(()),
            None => Err(MountError::MissingElement(id.to_string())),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use super::MountError;

    pub mod interval {
        use tokio::time::{self, Duration, Instant, MissedTickBehavior};

        const MAX_START_DELAY: Duration = Duration::from_secs(30 * 365 * 86_400);

        pub struct Interval {
            inner: tokio::time::Interval,
        }

        impl Interval {
            /// The first tick completes one full `duration` after creation,
            /// matching the browser timer rather than tokio's immediate tick.
            pub fn new(duration: Duration) -> Self {
                let now = Instant::now();
                // far-future starts saturate instead of overflowing the clock
                let start = now.checked_add(duration).unwrap_or_else(|| now + MAX_START_DELAY);
                let mut interval = time::interval_at(start, duration);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                Self { inner: interval }
            }

            pub async fn tick(&mut self) {
                self.inner.tick().await;
            }
        }
    }


    /// Native windows create their own root, so there is nothing to check.
    pub fn require_mount_point(_id: &str) -> Result<(), MountError> {
        Ok(())
    }
}
