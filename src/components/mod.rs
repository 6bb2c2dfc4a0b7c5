//! UI Components for the portfolio page.

mod company_card;
mod contact_form;
mod footer;
pub mod icons;
mod loading_screen;
mod markdown;
mod mobile_menu;
mod nav_bar;
mod section_header;

pub use company_card::CompanyCard;
pub use contact_form::ContactForm;
pub use footer::Footer;
pub use icons::{Glyph, LucideIcon};
pub use loading_screen::LoadingScreen;
pub use markdown::{markdown_to_html, Markdown};
pub use mobile_menu::MobileMenu;
pub use nav_bar::NavBar;
pub use section_header::SectionHeading;
