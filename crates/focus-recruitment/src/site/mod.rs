//! Page routing and the static copy behind each page.

mod content;
mod pages;
pub mod router;

pub use content::{
    AboutContent, ContactContent, FeaturedJob, HomeContent, ProcessStep, ServiceOffering,
    ServicesContent, SiteContent, Testimonial, TitledItem, WhyChooseUsContent,
};
pub use pages::{NavLink, SitePage};
pub use router::{page_document, site_router, PageBody, PageDocument, SiteState};
