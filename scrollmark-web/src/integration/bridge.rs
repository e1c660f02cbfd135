use anyhow::{ self, Context };
use scrollmark_core::{ NotificationChannel, Subscription, ThresholdCrossed };
use scrollmark_toolkit::{ js::dommanip::html_window, js::timer::timeout_once, log_extra, warn };
use wasm_bindgen::JsValue;
use web_sys::{ CustomEvent, CustomEventInit };
use crate::util::error::js_error;

fn emit(name: &str, percentage: u32) -> anyhow::Result<()> {
    let cvi = CustomEventInit::new();
    cvi.set_bubbles(false);
    cvi.set_detail(&JsValue::from(percentage));
    let e = js_error(CustomEvent::new_with_event_init_dict(name,&cvi)).context("creating threshold event")?;
    let window = html_window().map_err(anyhow::Error::msg)?;
    js_error(window.dispatch_event(&e)).context("sending threshold event")?;
    Ok(())
}

/* Every threshold crossing is repeated as a DOM custom event on the window, for whoever else on the page
 * cares. It goes out on a zero timeout so that page listeners never run inside our own dispatch. An empty
 * name turns this off.
 */
pub(crate) fn mirror_to_window(channel: &NotificationChannel<ThresholdCrossed>, name: &str) -> Option<Subscription> {
    if name.is_empty() {
        log_extra!("threshold events not mirrored to the page");
        return None;
    }
    let name = name.to_string();
    Some(channel.subscribe(move |crossed: &ThresholdCrossed| {
        let name = name.clone();
        let percentage = crossed.percentage();
        let sent = timeout_once(0,move || {
            if let Err(e) = emit(&name,percentage) {
                warn!("cannot mirror threshold event: {:#}",e);
            }
        });
        if let Err(e) = sent {
            warn!("cannot schedule threshold event: {}",e);
        }
    }))
}
