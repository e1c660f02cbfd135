use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn html_window() -> Result<Window,String> {
    web_sys::window().ok_or_else(|| "cannot retrieve window object".to_string())
}

pub fn html_document() -> Result<Document,String> {
    html_window()?.document().ok_or_else(|| "cannot retrieve document element".to_string())
}

pub fn to_html(e: Element) -> Result<HtmlElement,String> {
    e.dyn_into::<web_sys::HtmlElement>().ok().ok_or_else(|| "cannot map element to htmlelement".to_string())
}

/* Ok(None) means the query ran fine but nothing matched */
pub fn query_selector(selector: &str) -> Result<Option<HtmlElement>,String> {
    let element = html_document()?.query_selector(selector).map_err(|e| format!("bad selector '{}': {:?}",selector,e))?;
    element.map(to_html).transpose()
}

pub fn element_by_id(id: &str) -> Result<Option<HtmlElement>,String> {
    html_document()?.get_element_by_id(id).map(to_html).transpose()
}
