use dioxus::prelude::*;

use crate::shared::today::{Clock as ClockSource, SystemClock};
use crate::utils::format::format_clock;

pub const CLOCK_TICK_MS: u32 = 1_000;

/// One tick: the clock's current reading as displayed.
pub fn tick(clock: &impl ClockSource) -> String {
    format_clock(&clock.now())
}

/// Live `HH:MM:SS` clock, re-read every second. Never touches the network.
#[allow(non_snake_case)]
#[component]
pub fn Clock() -> Element {
    #[allow(unused_mut)]
    let mut now = use_signal(|| tick(&SystemClock));

    #[cfg(feature = "web")]
    {
        use gloo_timers::callback::Interval;

        let ticker: Signal<Option<Interval>> = use_signal(|| None);

        // teardown on unmount
        use_drop({
            let mut ticker = ticker.clone();
            move || {
                if let Some(h) = ticker.write().take() {
                    h.cancel();
                }
            }
        });

        // registered once, after hydration
        use_effect({
            let mut ticker = ticker.clone();
            move || {
                if ticker.peek().is_some() {
                    return;
                }
                let handle = Interval::new(CLOCK_TICK_MS, move || {
                    now.set(tick(&SystemClock));
                });
                ticker.set(Some(handle));
            }
        });
    }

    // native renderers; the task is dropped with the component
    #[cfg(all(not(feature = "web"), any(feature = "desktop", feature = "mobile")))]
    use_future(move || async move {
        let period = std::time::Duration::from_millis(CLOCK_TICK_MS as u64);
        loop {
            tokio::time::sleep(period).await;
            now.set(tick(&SystemClock));
        }
    });

    rsx! {
        span { class: "tabular-nums", "{now}" }
    }
}
