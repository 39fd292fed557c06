//! Mobile navigation toggle.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::FolioConfig;
use folio_core::constants::{ATTR_ARIA_EXPANDED, CLASS_ACTIVE};
use folio_core::menu::{MenuController, MenuEvent, MenuView};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent, Node};

use crate::dom;

/// Elements the menu writes to.
#[derive(Clone)]
struct MenuElements {
    toggle: HtmlElement,
    menu: HtmlElement,
    body: Option<HtmlElement>,
}

impl MenuElements {
    fn render(&self, view: MenuView) {
        let _ = self
            .toggle
            .set_attribute(ATTR_ARIA_EXPANDED, view.aria_expanded());
        dom::set_class(&self.menu, CLASS_ACTIVE, view.menu_active);
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", view.body_overflow);
        }
    }

    fn contains(&self, target: Option<&Node>) -> bool {
        self.toggle.contains(target) || self.menu.contains(target)
    }
}

type SharedMenu = Rc<RefCell<MenuController>>;

fn dispatch(controller: &SharedMenu, elements: &MenuElements, event: MenuEvent) {
    let view = controller.borrow_mut().handle(event);
    if let Some(view) = view {
        elements.render(view);
    }
}

/// Wire the toggle, nav links, outside clicks and Escape to one controller.
///
/// Returns `None` without attaching anything when the toggle or menu is absent.
#[must_use]
pub fn install(doc: &Document, cfg: &FolioConfig) -> Option<SharedMenu> {
    let toggle = dom::query_one(doc, &cfg.selectors.nav_toggle);
    let menu = dom::query_one(doc, &cfg.selectors.nav_menu);
    let (Some(toggle), Some(menu)) = (toggle, menu) else {
        log::debug!("menu: toggle or panel missing, skipping");
        return None;
    };
    let elements = MenuElements {
        toggle,
        menu,
        body: doc.body(),
    };
    let controller: SharedMenu = Rc::new(RefCell::new(MenuController::new()));
    let links = dom::query_all(doc, &cfg.selectors.nav_link);

    attach(doc, &controller, &elements, &links);
    log::debug!("menu: wired with {} links", links.len());
    Some(controller)
}

/// Listeners live for the page lifetime, so each one is forgotten once attached.
fn attach(doc: &Document, controller: &SharedMenu, elements: &MenuElements, links: &[HtmlElement]) {
    {
        let controller = controller.clone();
        let elements = elements.clone();
        let toggle = elements.toggle.clone();
        EventListener::new(&toggle, "click", move |_event: &Event| {
            dispatch(&controller, &elements, MenuEvent::ToggleActivated);
        })
        .forget();
    }

    for link in links {
        let controller = controller.clone();
        let elements = elements.clone();
        EventListener::new(link, "click", move |_event: &Event| {
            dispatch(&controller, &elements, MenuEvent::LinkActivated);
        })
        .forget();
    }

    {
        let controller = controller.clone();
        let elements = elements.clone();
        EventListener::new(doc, "click", move |event: &Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !elements.contains(target.as_ref()) {
                dispatch(&controller, &elements, MenuEvent::OutsidePointer);
            }
        })
        .forget();
    }

    let controller = controller.clone();
    let elements = elements.clone();
    EventListener::new(doc, "keydown", move |event: &Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if let Some(menu_event) = MenuEvent::from_key(&event.key()) {
            dispatch(&controller, &elements, menu_event);
        }
    })
    .forget();
}
