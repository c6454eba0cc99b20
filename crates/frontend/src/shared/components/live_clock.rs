//! Header clock driven by a periodic task.
//!
//! The task sleeps until the next tick boundary, publishes the local time and
//! exits once its signal has been disposed together with the owning view.

use crate::shared::format::{format_clock_date, format_clock_time};
use chrono::{Local, NaiveDateTime, Timelike};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Milliseconds until the next multiple of `tick_ms`, so the displayed
/// seconds flip together with the wall clock.
pub fn next_delay_ms(now: NaiveDateTime, tick_ms: u32) -> u32 {
    if tick_ms == 0 {
        return 0;
    }
    let millis_of_minute = now.second() * 1000 + now.nanosecond() / 1_000_000 % 1000;
    let elapsed = millis_of_minute % tick_ms;
    tick_ms - elapsed
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[component]
pub fn LiveClock(
    /// Tick interval in milliseconds
    tick_ms: u32,
) -> impl IntoView {
    let now = RwSignal::new(local_now());

    spawn_local(async move {
        loop {
            TimeoutFuture::new(next_delay_ms(local_now(), tick_ms)).await;
            if now.try_set(local_now()).is_some() {
                log::debug!("LiveClock disposed, stopping ticker");
                break;
            }
        }
    });

    view! {
        <div class="live-clock" title="Local time">
            <span class="live-clock__time">{move || format_clock_time(now.get())}</span>
            <span class="live-clock__date">{move || format_clock_date(now.get())}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(sec: u32, milli: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_milli_opt(10, 30, sec, milli)
            .unwrap()
    }

    #[test]
    fn test_delay_aligns_to_second() {
        assert_eq!(next_delay_ms(at(5, 250), 1000), 750);
        assert_eq!(next_delay_ms(at(5, 0), 1000), 1000);
    }

    #[test]
    fn test_delay_for_longer_ticks() {
        assert_eq!(next_delay_ms(at(7, 500), 5000), 2500);
        assert_eq!(next_delay_ms(at(0, 0), 0), 0);
    }
}
