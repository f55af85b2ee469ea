//! Section identifier registry.
//!
//! Section identifiers are the wire contract between the authoring
//! tooling and this renderer: string keys of the form
//! `<family>-<version>-<kind>-<index>`, matched exactly, version and
//! index suffixes included. The registry is organized by template
//! family but dispatch is a single flat lookup on the full string.
//!
//! Identifiers not present here are future/unreleased section types and
//! must render nothing — never an error — so old engines keep rendering
//! the rest of the page when the backend starts emitting new blocks.

/// Known section identifier strings, grouped by template family.
pub mod idents {
    // auto-garage-modern family
    pub const AUTO_GARAGE_HERO: &str = "jcw-auto-garage-modern-01-hero-01";
    pub const AUTO_GARAGE_SERVICES: &str = "jcw-auto-garage-modern-01-services-01";
    pub const AUTO_GARAGE_TESTIMONIALS: &str = "jcw-auto-garage-modern-01-testimonials-01";
    pub const AUTO_GARAGE_QUOTE_FORM: &str = "jcw-auto-garage-modern-01-quote-form-01";
    pub const AUTO_GARAGE_FOOTER: &str = "jcw-auto-garage-modern-01-footer-01";

    // restaurant-modern family
    pub const RESTAURANT_HERO: &str = "jcw-restaurant-modern-01-hero-01";
    pub const RESTAURANT_MENU: &str = "jcw-restaurant-modern-01-menu-01";
    pub const RESTAURANT_HOURS: &str = "jcw-restaurant-modern-01-hours-01";
    pub const RESTAURANT_FOOTER: &str = "jcw-restaurant-modern-01-footer-01";

    // generic marketing family
    pub const MARKETING_HERO: &str = "jcw-marketing-01-hero-01";
    pub const MARKETING_FEATURES: &str = "jcw-marketing-01-features-01";
    pub const MARKETING_CTA: &str = "jcw-marketing-01-cta-01";
    pub const MARKETING_FOOTER: &str = "jcw-marketing-01-footer-01";
}

/// The closed set of section kinds this engine can render.
///
/// Parsing an identifier either lands on a variant or on `None`; the
/// `None` case is the forward-compatibility path and is handled by the
/// renderer as a silent skip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    AutoGarageHero,
    AutoGarageServices,
    AutoGarageTestimonials,
    AutoGarageQuoteForm,
    AutoGarageFooter,
    RestaurantHero,
    RestaurantMenu,
    RestaurantHours,
    RestaurantFooter,
    MarketingHero,
    MarketingFeatures,
    MarketingCta,
    MarketingFooter,
}

impl SectionKind {
    /// Look up a section kind by its full identifier string.
    ///
    /// Case-sensitive exact match. Unknown identifiers return `None`.
    #[must_use]
    pub fn parse(identifier: &str) -> Option<Self> {
        match identifier {
            idents::AUTO_GARAGE_HERO => Some(Self::AutoGarageHero),
            idents::AUTO_GARAGE_SERVICES => Some(Self::AutoGarageServices),
            idents::AUTO_GARAGE_TESTIMONIALS => Some(Self::AutoGarageTestimonials),
            idents::AUTO_GARAGE_QUOTE_FORM => Some(Self::AutoGarageQuoteForm),
            idents::AUTO_GARAGE_FOOTER => Some(Self::AutoGarageFooter),
            idents::RESTAURANT_HERO => Some(Self::RestaurantHero),
            idents::RESTAURANT_MENU => Some(Self::RestaurantMenu),
            idents::RESTAURANT_HOURS => Some(Self::RestaurantHours),
            idents::RESTAURANT_FOOTER => Some(Self::RestaurantFooter),
            idents::MARKETING_HERO => Some(Self::MarketingHero),
            idents::MARKETING_FEATURES => Some(Self::MarketingFeatures),
            idents::MARKETING_CTA => Some(Self::MarketingCta),
            idents::MARKETING_FOOTER => Some(Self::MarketingFooter),
            _ => None,
        }
    }

    /// The identifier string this kind matches.
    #[must_use]
    pub fn identifier(self) -> &'static str {
        match self {
            Self::AutoGarageHero => idents::AUTO_GARAGE_HERO,
            Self::AutoGarageServices => idents::AUTO_GARAGE_SERVICES,
            Self::AutoGarageTestimonials => idents::AUTO_GARAGE_TESTIMONIALS,
            Self::AutoGarageQuoteForm => idents::AUTO_GARAGE_QUOTE_FORM,
            Self::AutoGarageFooter => idents::AUTO_GARAGE_FOOTER,
            Self::RestaurantHero => idents::RESTAURANT_HERO,
            Self::RestaurantMenu => idents::RESTAURANT_MENU,
            Self::RestaurantHours => idents::RESTAURANT_HOURS,
            Self::RestaurantFooter => idents::RESTAURANT_FOOTER,
            Self::MarketingHero => idents::MARKETING_HERO,
            Self::MarketingFeatures => idents::MARKETING_FEATURES,
            Self::MarketingCta => idents::MARKETING_CTA,
            Self::MarketingFooter => idents::MARKETING_FOOTER,
        }
    }

    /// All known kinds, in registry order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::AutoGarageHero,
            Self::AutoGarageServices,
            Self::AutoGarageTestimonials,
            Self::AutoGarageQuoteForm,
            Self::AutoGarageFooter,
            Self::RestaurantHero,
            Self::RestaurantMenu,
            Self::RestaurantHours,
            Self::RestaurantFooter,
            Self::MarketingHero,
            Self::MarketingFeatures,
            Self::MarketingCta,
            Self::MarketingFooter,
        ]
    }
}
