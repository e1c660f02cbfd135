use std::collections::HashMap;
use std::sync::{ Arc, Mutex };
use js_sys::{ Function, Reflect };
use scrollmark_core::{ Message, MessageLevel, ScrollConfigKey, ScrollMarkConfig, ScrollTracker };
use scrollmark_toolkit::console::set_verbosity;
use scrollmark_toolkit::js::exception::js_result_to_option_console;
use scrollmark_toolkit::plumbing::oneshot::OneShot;
use scrollmark_toolkit::{ lock, log, log_extra, warn };
use wasm_bindgen::prelude::*;

mod dom {
    pub(crate) mod environment;
    pub(crate) mod scheduler;
    pub(crate) mod surface;
}

mod input {
    pub(crate) mod event;
}

mod integration {
    pub(crate) mod bridge;
    pub(crate) mod console;
}

mod util {
    pub(crate) mod error;
}

use crate::dom::environment::DomEnvironment;
use crate::dom::scheduler::WindowScheduler;
use crate::dom::surface::DomToastSurface;
use crate::input::event::WindowListener;
use crate::integration::bridge::mirror_to_window;
use crate::integration::console::install_console;
use crate::util::error::{ confused_browser, message_to_js };

struct Running {
    tracker: Arc<Mutex<ScrollTracker>>,
    listener: WindowListener,
    shutdown: OneShot
}

/* The handle the page holds. Nothing happens until start(); stop() undoes everything start() did, after
 * which start() may be called again.
 */
#[wasm_bindgen]
pub struct ScrollMark {
    running: Option<Running>,
    reporter: Option<Function>
}

fn build_config(config_object: &JsValue) -> Result<HashMap<String,String>,Message> {
    let mut out = HashMap::new();
    if config_object.is_undefined() || config_object.is_null() { return Ok(out); }
    for key in confused_browser(Reflect::own_keys(config_object))?.iter() {
        let value = confused_browser(Reflect::get(config_object,&key))?;
        let key_str = key.as_string().ok_or_else(|| Message::ConfusedWebBrowser("bad config key".to_string()))?;
        let value_str = value.as_string()
            .or_else(|| value.as_f64().map(|x| x.to_string()))
            .ok_or_else(|| Message::ConfusedWebBrowser(format!("bad value for config key '{}'",key_str)))?;
        out.insert(key_str,value_str);
    }
    Ok(out)
}

fn make_config(config_object: &JsValue) -> Result<ScrollMarkConfig,Message> {
    let mut config = ScrollMarkConfig::new();
    for (k,v) in build_config(config_object)?.iter() {
        match config.set(k,v) {
            Err(Message::BadConfig(scrollmark_config::ConfigError::UnknownConfigKey(k))) => {
                warn!("ignoring unknown config key '{}'",k);
            },
            other => other?
        }
    }
    Ok(config)
}

#[wasm_bindgen]
impl ScrollMark {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ScrollMark {
        install_console();
        ScrollMark {
            running: None,
            reporter: None
        }
    }

    /* cb(level,text,code) for everything that goes wrong after start(). Takes effect from the next start(). */
    pub fn set_message_reporter(&mut self, cb: Function) {
        self.reporter = Some(cb);
    }

    fn start_real(&mut self, config_object: &JsValue, lazyload: Option<Function>) -> Result<(),Message> {
        if self.running.is_some() {
            log_extra!("already started");
            return Ok(());
        }
        let config = make_config(config_object)?;
        set_verbosity(&config.verbosity()?);
        /*
         * Look for the tracked element before anything is registered so that a page without one fails here.
         */
        let environment = DomEnvironment::new(config.get_str(&ScrollConfigKey::TrackedSelector)?)?;
        let surface = DomToastSurface::new(
            config.get_str(&ScrollConfigKey::ToastElementId)?,
            config.get_str(&ScrollConfigKey::ToastShowClass)?
        );
        let mut tracker = ScrollTracker::new(&config,Box::new(environment),Box::new(surface),Arc::new(WindowScheduler))?;
        if let Some(reporter) = self.reporter.clone() {
            /* deferred: the page's callback may well call straight back into us */
            tracker.reporter().set_deferred(Arc::new(WindowScheduler),move |message| {
                let level = match message.level() {
                    MessageLevel::Warn => "warning",
                    MessageLevel::Error => "error"
                };
                let (kind,hash) = message.code();
                js_result_to_option_console(reporter.call3(&JsValue::NULL,&JsValue::from(level),&JsValue::from(message.to_string()),&JsValue::from(format!("{}-{:x}",kind,hash))));
            });
        }
        let shutdown = OneShot::new();
        if let Some(subscription) = mirror_to_window(tracker.channel(),config.get_str(&ScrollConfigKey::EventName)?) {
            let channel = tracker.channel().clone();
            shutdown.add(move || { channel.unsubscribe(subscription); });
        }
        tracker.start();
        let tracker = Arc::new(Mutex::new(tracker));
        let tracker2 = tracker.clone();
        let listener = WindowListener::new("scroll",move |_| {
            /* failures are reported by the tracker itself */
            let _ = lock!(tracker2).tick();
        })?;
        self.running = Some(Running { tracker, listener, shutdown });
        /*
         * The lazy loader is someone else's business. We kick it off and that's all.
         */
        if let Some(lazyload) = lazyload {
            js_result_to_option_console(lazyload.call0(&JsValue::NULL));
        }
        log!("scrollmark started");
        Ok(())
    }

    pub fn start(&mut self, config_object: &JsValue, lazyload: Option<Function>) -> Result<(),JsValue> {
        self.start_real(config_object,lazyload).map_err(message_to_js)
    }

    pub fn stop(&mut self) {
        if let Some(mut running) = self.running.take() {
            if let Err(e) = running.listener.finish() {
                warn!("{}",e);
            }
            running.shutdown.run();
            lock!(running.tracker).stop();
        }
    }

    pub fn running(&self) -> bool { self.running.is_some() }

    pub fn toast_visible(&self) -> bool {
        self.running.as_ref().map(|r| lock!(r.tracker).presenter().visible()).unwrap_or(false)
    }
}

impl Drop for ScrollMark {
    fn drop(&mut self) {
        self.stop();
    }
}
