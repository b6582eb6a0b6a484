use crate::booking::BookingForm;
use crate::config::{OpeningHours, SiteConfig};
use crate::format::min_booking_date;
use crate::scroll::{self, anchor_target, ScrollFrame, SectionBounds};
use chrono::{Local, NaiveDate};
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("No global window")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("Missing element: {0}")]
    MissingElement(String),
    #[error("Element {0} has an unexpected type")]
    WrongElementType(String),
    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for ControllerError {
    fn from(value: JsValue) -> Self {
        ControllerError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<ControllerError> for JsValue {
    fn from(error: ControllerError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Open,
    Closed,
}

impl ModalState {
    pub fn display(&self) -> &'static str {
        match self {
            ModalState::Open => "block",
            ModalState::Closed => "none",
        }
    }

    /// The page behind an open modal must not scroll.
    pub fn body_overflow(&self) -> &'static str {
        match self {
            ModalState::Open => "hidden",
            ModalState::Closed => "auto",
        }
    }
}

/// What the page does after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Confirm, reset the form and close the modal.
    Booked { confirmation: String },
    /// List the errors and leave the form open and populated.
    Rejected { alert: String },
}

impl SubmitOutcome {
    pub fn evaluate(form: &BookingForm, today: NaiveDate, hours: &OpeningHours) -> Self {
        match form.validate(today, hours) {
            Ok(request) => {
                info!("Table booked for {} at {}", request.date, request.time);
                SubmitOutcome::Booked {
                    confirmation: request.confirmation(),
                }
            }
            Err(errors) => {
                debug!("Booking rejected: {}", errors);
                SubmitOutcome::Rejected {
                    alert: errors.alert_text(),
                }
            }
        }
    }

    pub fn alert_text(&self) -> &str {
        match self {
            SubmitOutcome::Booked { confirmation } => confirmation,
            SubmitOutcome::Rejected { alert } => alert,
        }
    }

    pub fn resets_form(&self) -> bool {
        matches!(self, SubmitOutcome::Booked { .. })
    }

    pub fn modal_after(&self) -> ModalState {
        match self {
            SubmitOutcome::Booked { .. } => ModalState::Closed,
            SubmitOutcome::Rejected { .. } => ModalState::Open,
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, ControllerError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ControllerError::MissingElement(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| ControllerError::WrongElementType(format!("#{id}")))
}

fn select<T: JsCast>(document: &Document, selector: &str) -> Result<T, ControllerError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| ControllerError::MissingElement(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| ControllerError::WrongElementType(selector.to_string()))
}

fn select_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>, ControllerError> {
    let nodes = document.query_selector_all(selector)?;
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .map(|node| {
            node.dyn_into::<T>()
                .map_err(|_| ControllerError::WrongElementType(selector.to_string()))
        })
        .collect()
}

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), ControllerError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // listeners live as long as the page
    closure.forget();
    Ok(())
}

/// Owns every widget the page behaviour touches. Built once at start-up.
pub struct SiteController {
    config: SiteConfig,
    window: Window,
    document: Document,
    body: HtmlElement,
    modal: HtmlElement,
    trigger: HtmlElement,
    close: HtmlElement,
    form: HtmlFormElement,
    name: HtmlInputElement,
    email: HtmlInputElement,
    date: HtmlInputElement,
    time: HtmlInputElement,
    message: HtmlTextAreaElement,
    sections: Vec<HtmlElement>,
    nav_links: Vec<Element>,
    anchors: Vec<Element>,
    navbar: HtmlElement,
}

impl SiteController {
    /// Looks up the page elements, initialises the date input and registers all handlers.
    pub fn attach(config: SiteConfig) -> Result<Rc<Self>, ControllerError> {
        let window = web_sys::window().ok_or(ControllerError::NoWindow)?;
        let document = window.document().ok_or(ControllerError::NoDocument)?;
        let body = document
            .body()
            .ok_or_else(|| ControllerError::MissingElement("body".to_string()))?;

        let ids = &config.form;
        let controller = Rc::new(Self {
            modal: by_id(&document, &ids.modal)?,
            trigger: by_id(&document, &ids.trigger)?,
            close: select(&document, &ids.close_selector)?,
            form: by_id(&document, &ids.form)?,
            name: by_id(&document, &ids.name)?,
            email: by_id(&document, &ids.email)?,
            date: by_id(&document, &ids.date)?,
            time: by_id(&document, &ids.time)?,
            message: by_id(&document, &ids.message)?,
            sections: select_all(&document, &config.section_selector)?,
            nav_links: select_all(&document, &config.nav_link_selector)?,
            anchors: select_all(&document, &config.anchor_selector)?,
            navbar: select(&document, &config.navbar_selector)?,
            body,
            document,
            window,
            config,
        });

        controller.date.set_min(&min_booking_date(today()));
        Self::register(&controller)?;

        info!(
            "Site controller attached: {} sections, {} nav links, {} anchors",
            controller.sections.len(),
            controller.nav_links.len(),
            controller.anchors.len()
        );
        Ok(controller)
    }

    fn register(this: &Rc<Self>) -> Result<(), ControllerError> {
        for anchor in &this.anchors {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let controller = Rc::clone(this);
            listen(anchor, "click", move |event| {
                controller.scroll_to_anchor(&event, &href)
            })?;
        }

        let controller = Rc::clone(this);
        listen(&this.trigger, "click", move |_| {
            controller.set_modal(ModalState::Open)
        })?;

        let controller = Rc::clone(this);
        listen(&this.close, "click", move |_| {
            controller.set_modal(ModalState::Closed)
        })?;

        let controller = Rc::clone(this);
        listen(&this.window, "click", move |event| {
            controller.close_on_backdrop(&event)
        })?;

        let controller = Rc::clone(this);
        listen(&this.form, "submit", move |event| controller.submit(&event))?;

        let controller = Rc::clone(this);
        listen(&this.window, "scroll", move |_| controller.on_scroll())?;

        Ok(())
    }

    fn scroll_to_anchor(&self, event: &Event, href: &str) {
        event.prevent_default();
        let Some(target) = anchor_target(href).and_then(|id| self.document.get_element_by_id(id))
        else {
            debug!("No scroll target for {}", href);
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }

    pub fn set_modal(&self, state: ModalState) {
        debug!("Modal {:?}", state);
        let result = self
            .modal
            .style()
            .set_property("display", state.display())
            .and_then(|_| {
                self.body
                    .style()
                    .set_property("overflow", state.body_overflow())
            });
        if let Err(e) = result {
            warn!("Failed to update modal: {:?}", e);
        }
    }

    fn close_on_backdrop(&self, event: &Event) {
        let on_backdrop = event.target().is_some_and(|target| {
            let target: &JsValue = target.as_ref();
            let modal: &JsValue = self.modal.as_ref();
            target == modal
        });
        if on_backdrop {
            self.set_modal(ModalState::Closed);
        }
    }

    fn read_form(&self) -> BookingForm {
        BookingForm {
            name: self.name.value(),
            email: self.email.value(),
            date: self.date.value(),
            time: self.time.value(),
            message: self.message.value(),
        }
    }

    fn submit(&self, event: &Event) {
        event.prevent_default();

        let outcome = SubmitOutcome::evaluate(&self.read_form(), today(), &self.config.hours);
        self.alert(outcome.alert_text());
        if outcome.resets_form() {
            self.form.reset();
        }
        self.set_modal(outcome.modal_after());
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            warn!("Failed to show alert: {:?}", e);
        }
    }

    fn on_scroll(&self) {
        let scroll_y = match self.window.scroll_y() {
            Ok(scroll_y) => scroll_y,
            Err(e) => {
                warn!("Failed to read scroll position: {:?}", e);
                return;
            }
        };

        let sections = self
            .sections
            .iter()
            .map(|section| SectionBounds {
                id: section.get_attribute("id"),
                top: section.offset_top() as f64,
            })
            .collect::<Vec<SectionBounds>>();

        self.apply(&scroll::observe(&sections, scroll_y, &self.config));
    }

    fn apply(&self, frame: &ScrollFrame) {
        let class = self.config.active_class.as_str();
        for link in &self.nav_links {
            let href = link.get_attribute("href").unwrap_or_default();
            let classes = link.class_list();
            let result = if frame.is_active_link(&href) {
                classes.add_1(class)
            } else {
                classes.remove_1(class)
            };
            if let Err(e) = result {
                warn!("Failed to update nav link {}: {:?}", href, e);
            }
        }

        if let Err(e) = self
            .navbar
            .style()
            .set_property("background-color", frame.navbar.css(&self.config))
        {
            warn!("Failed to update navbar: {:?}", e);
        }
    }
}
