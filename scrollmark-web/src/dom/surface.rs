use scrollmark_core::{ Message, ToastSurface };
use scrollmark_toolkit::js::dommanip::element_by_id;
use web_sys::HtmlElement;
use crate::util::error::confused_browser;

/* The element is looked up afresh each time: the page is free to remove and re-add it. */
pub(crate) struct DomToastSurface {
    id: String,
    show_class: String
}

impl DomToastSurface {
    pub(crate) fn new(id: &str, show_class: &str) -> DomToastSurface {
        DomToastSurface {
            id: id.to_string(),
            show_class: show_class.to_string()
        }
    }

    fn element(&self) -> Result<HtmlElement,Message> {
        element_by_id(&self.id).map_err(Message::ConfusedWebBrowser)?
            .ok_or_else(|| Message::MissingPresentationSurface(self.id.clone()))
    }
}

impl ToastSurface for DomToastSurface {
    fn show(&mut self, message: &str) -> Result<(),Message> {
        let el = self.element()?;
        el.set_inner_html(message);
        confused_browser(el.class_list().add_1(&self.show_class))
    }

    fn hide(&mut self) -> Result<(),Message> {
        let el = self.element()?;
        confused_browser(el.class_list().remove_1(&self.show_class))
    }
}
