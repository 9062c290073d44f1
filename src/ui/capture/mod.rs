//! Email-capture form: reactive controller and section component

mod controller;
mod form;

pub use controller::CaptureController;
pub use form::EmailCaptureSection;
