//=============================================================================
// File: src/hooks/use_price_feed.rs
//=============================================================================
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use market::price_feed::PriceFeed;
use market::trading_pair::TradingPair;

use crate::compat::interval::Interval;

/// Replaces the whole pair list every `period` with simulated prices.
///
/// The ticker runs as a task owned by the calling component. When that
/// component unmounts the task is dropped along with its interval, so no
/// update can land afterwards.
pub fn use_price_feed(mut pairs: Signal<Vec<TradingPair>>, period: Duration, rate: f64) {
    use_future(move || async move {
        let mut feed = PriceFeed::with_rate(rand::thread_rng(), rate);
        tracing::debug!("price feed started, ticking every {:?}", period);

        drive_ticker(period, move || {
            let next = feed.tick(&pairs.peek());
            tracing::debug!("price tick: {} pairs", next.len());
            // single write, so readers never see a half-updated list
            pairs.set(next);
        })
        .await;
    });

    use_drop(|| tracing::debug!("price feed stopped"));
}

/// Calls `on_tick` once per `period`, forever. The first call happens one
/// full period after start.
pub async fn drive_ticker(period: Duration, mut on_tick: impl FnMut()) {
    let mut interval = Interval::new(period);
    loop {
        interval.tick().await;
        on_tick();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::testing::{mount, pump};
    use market::price_feed::DEFAULT_FLUCTUATION_RATE;
    use market::trading_pair::seed_pairs;
    use std::cell::Cell;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use std::sync::Mutex;

    const PERIOD: Duration = Duration::from_secs(3);

    fn counting_ticker() -> (Arc<AtomicUsize>, tokio::task::JoinHandle<()>) {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = ticks.clone();
        let handle = tokio::spawn(drive_ticker(PERIOD, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        (ticks, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_a_full_period() {
        let (ticks, handle) = counting_ticker();

        tokio::time::sleep(Duration::from_millis(2_900)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        tokio::time::sleep(PERIOD * 3).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 4);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn no_ticks_after_teardown() {
        let (ticks, handle) = counting_ticker();

        tokio::time::sleep(Duration::from_millis(3_100)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        handle.abort();
        assert!(handle.await.unwrap_err().is_cancelled());

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    thread_local! {
        static FEED_HOST: Cell<Option<(Signal<bool>, Signal<Vec<TradingPair>>)>> =
            const { Cell::new(None) };
    }

    fn feed_host() -> Element {
        let show = use_signal(|| true);
        let pairs = use_signal(seed_pairs);
        FEED_HOST.with(|slot| slot.set(Some((show, pairs))));

        rsx! {
            if show() {
                FeedOwner { pairs }
            }
        }
    }

    #[component]
    fn FeedOwner(pairs: Signal<Vec<TradingPair>>) -> Element {
        use_price_feed(pairs, PERIOD, DEFAULT_FLUCTUATION_RATE);
        rsx! {}
    }

    #[tokio::test(start_paused = true)]
    async fn unmounting_the_owner_stops_the_feed() {
        let (mut dom, _) = mount(feed_host);
        let (mut show, pairs) = FEED_HOST.with(|slot| slot.get()).unwrap();
        let current = |dom: &VirtualDom| dom.in_runtime(|| pairs.peek().clone());

        pump(&mut dom, Duration::from_millis(2_900)).await;
        assert_eq!(current(&dom), seed_pairs());

        pump(&mut dom, Duration::from_millis(200)).await;
        let first = current(&dom);
        assert_eq!(first.len(), 10);
        assert_ne!(first, seed_pairs());

        pump(&mut dom, PERIOD).await;
        let second = current(&dom);
        assert_ne!(second, first);

        dom.in_runtime(|| show.set(false));
        pump(&mut dom, Duration::from_millis(100)).await;
        let at_teardown = current(&dom);

        pump(&mut dom, Duration::from_secs(30)).await;
        assert_eq!(current(&dom), at_teardown);
        assert_eq!(at_teardown, second);
    }

    #[tokio::test(start_paused = true)]
    async fn one_tick_recomputes_every_pair() {
        let pairs = Arc::new(Mutex::new(seed_pairs()));
        let shared = pairs.clone();
        let mut feed = PriceFeed::new(StdRng::seed_from_u64(5));

        let handle = tokio::spawn(drive_ticker(PERIOD, move || {
            let mut list = shared.lock().unwrap();
            let next = feed.tick(&list);
            *list = next;
        }));

        tokio::time::sleep(Duration::from_millis(3_100)).await;
        handle.abort();

        let after = pairs.lock().unwrap().clone();
        let before = seed_pairs();
        assert_eq!(after.len(), 10);
        for (old, new) in before.iter().zip(&after) {
            assert_eq!(old.name, new.name);
            assert!(new.change >= 0.0);
            assert!(new.change <= 0.0005 * old.price + 0.0001);
        }
        assert_ne!(before, after);
    }
}
