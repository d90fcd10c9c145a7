//! Heavylight WASM Module
//!
//! WebAssembly bindings over the shared aggregation and timer logic so the
//! browser runs the same streak, calendar, and unit math as the server.

use chrono::NaiveDate;
use heavylight_shared::calendar::{self, WorkoutDay};
use heavylight_shared::timer::{self, TickEvent};
use heavylight_shared::units::WeightUnit;
use wasm_bindgen::prelude::*;

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Current-day streak over a JSON array of workout days
#[wasm_bindgen]
pub fn current_streak(workouts_json: &str, today: &str) -> u32 {
    let Some(today) = parse_date(today) else {
        return 0;
    };
    let Ok(workouts) = serde_json::from_str::<Vec<WorkoutDay>>(workouts_json) else {
        return 0;
    };
    calendar::current_streak(&workouts, today)
}

/// Sunday-aligned calendar grid as JSON, or null on bad input
#[wasm_bindgen]
pub fn build_calendar(workouts_json: &str, weeks: u32, today: &str) -> JsValue {
    let Some(today) = parse_date(today) else {
        return JsValue::NULL;
    };
    let Ok(workouts) = serde_json::from_str::<Vec<WorkoutDay>>(workouts_json) else {
        return JsValue::NULL;
    };
    let grid = calendar::build_grid(&workouts, weeks, today);
    serde_json::to_string(&grid)
        .map(|s| JsValue::from_str(&s))
        .unwrap_or(JsValue::NULL)
}

/// Convert a display-unit weight to canonical kilograms
#[wasm_bindgen]
pub fn weight_to_kg(value: f64, unit: &str) -> f64 {
    unit.parse::<WeightUnit>().unwrap_or_default().to_kg(value)
}

/// Convert canonical kilograms to a display unit
#[wasm_bindgen]
pub fn weight_from_kg(kg: f64, unit: &str) -> f64 {
    unit.parse::<WeightUnit>().unwrap_or_default().from_kg(kg)
}

/// Format seconds as `m:ss`
#[wasm_bindgen]
pub fn format_timer(seconds: u32) -> String {
    timer::format_seconds(seconds)
}

/// Rest-timer countdown driven from a JS interval
#[wasm_bindgen]
pub struct RestTimer {
    inner: timer::RestTimer,
}

#[wasm_bindgen]
impl RestTimer {
    #[wasm_bindgen(constructor)]
    pub fn new(initial_seconds: u32) -> Self {
        Self {
            inner: timer::RestTimer::new(initial_seconds),
        }
    }

    pub fn start(&mut self) {
        self.inner.start();
    }

    pub fn pause(&mut self) {
        self.inner.pause();
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn dismiss(&mut self) {
        self.inner.dismiss();
    }

    /// Advance one second; returns "counting", "finished", "auto_dismiss"
    /// or "idle"
    pub fn tick(&mut self) -> String {
        match self.inner.tick() {
            TickEvent::Counting => "counting",
            TickEvent::Finished => "finished",
            TickEvent::AutoDismiss => "auto_dismiss",
            TickEvent::Idle => "idle",
        }
        .to_string()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.inner.remaining_seconds()
    }

    pub fn progress(&self) -> f64 {
        self.inner.progress()
    }

    pub fn display(&self) -> String {
        timer::format_seconds(self.inner.remaining_seconds())
    }
}
