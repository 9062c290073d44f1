//! Landing page UI components

pub mod agents;
pub mod background;
pub mod capture;
pub mod features;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod testimonials;

pub use agents::AgentsSection;
pub use background::AnimatedBackground;
pub use capture::EmailCaptureSection;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use icon::{Icon, icons};
pub use navbar::Navbar;
pub use testimonials::Testimonials;
