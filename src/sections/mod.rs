//! Content sections of the page, one per navigable anchor.

mod about;
mod companies;
mod contact;
mod experience;
mod hero;

pub use about::AboutSection;
pub use companies::CompaniesSection;
pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use hero::HeroSection;
