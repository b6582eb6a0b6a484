//! Interactive behaviour of the restaurant landing page.
//!
//! The pure parts (booking validation, formatting, scroll state) are plain Rust and
//! tested natively. [`controller::SiteController`] binds them to the DOM when the
//! module is loaded in the browser.

pub mod booking;
pub mod config;
pub mod controller;
pub mod format;
pub mod hourmin;
pub mod scroll;

pub use booking::{validate, BookingForm, BookingRequest, ValidationError, ValidationErrors};
pub use config::{OpeningHours, SiteConfig};
pub use controller::{ControllerError, ModalState, SiteController, SubmitOutcome};
pub use format::{format_date, format_time, min_booking_date};
pub use hourmin::HourMin;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn site_start() -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    // every handler holds its own reference, so the controller outlives this call
    SiteController::attach(SiteConfig::default())?;
    Ok(())
}
