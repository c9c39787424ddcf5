//! Host callbacks supplied from JavaScript
//!
//! The host object may carry any of `prompt(message, default)`,
//! `seekTo(seconds)`, `pause()`, `togglePlay()` and `track(event)`.
//! Missing callbacks are skipped; a missing `prompt` falls back to
//! `window.prompt`.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::host::{Analytics, AnalyticsEvent, Playback, Prompt};
use crate::{wasm_log, wasm_warn};

/// Analytics payload handed to `track`
#[derive(Serialize)]
struct TrackedEvent<'a> {
    category: &'static str,
    action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

pub struct JsHost {
    callbacks: JsValue,
}

impl JsHost {
    pub fn new(callbacks: JsValue) -> Self {
        Self { callbacks }
    }

    fn callback(&self, name: &str) -> Option<js_sys::Function> {
        if self.callbacks.is_undefined() || self.callbacks.is_null() {
            return None;
        }
        js_sys::Reflect::get(&self.callbacks, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
    }

    fn call(&self, name: &str, args: &[JsValue]) -> Option<JsValue> {
        let function = self.callback(name)?;
        let result = match args {
            [] => function.call0(&self.callbacks),
            [a] => function.call1(&self.callbacks, a),
            [a, b] => function.call2(&self.callbacks, a, b),
            _ => function.apply(&self.callbacks, &args.iter().collect::<js_sys::Array>()),
        };
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                wasm_warn!("Host callback {} threw: {:?}", name, e);
                None
            }
        }
    }
}

impl Prompt for JsHost {
    fn prompt_text(&mut self, message: &str, default: Option<&str>) -> Option<String> {
        if self.callback("prompt").is_some() {
            let default = default.map(JsValue::from_str).unwrap_or(JsValue::NULL);
            return self
                .call("prompt", &[JsValue::from_str(message), default])?
                .as_string();
        }

        let window = web_sys::window()?;
        window
            .prompt_with_message_and_default(message, default.unwrap_or(""))
            .ok()
            .flatten()
    }
}

impl Playback for JsHost {
    fn seek_to(&mut self, seconds: f64) {
        self.call("seekTo", &[JsValue::from_f64(seconds)]);
    }

    fn pause(&mut self) {
        self.call("pause", &[]);
    }

    fn toggle_play(&mut self) {
        self.call("togglePlay", &[]);
    }
}

impl Analytics for JsHost {
    fn track(&mut self, event: AnalyticsEvent) {
        wasm_log!("track: {}", event.action());
        let payload = TrackedEvent {
            category: event.category(),
            action: event.action(),
            description: event.description(),
        };
        match serde_wasm_bindgen::to_value(&payload) {
            Ok(value) => {
                self.call("track", &[value]);
            }
            Err(e) => wasm_warn!("Could not serialize analytics event: {}", e),
        }
    }
}
