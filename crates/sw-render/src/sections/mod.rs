//! Section components, grouped by template family.
//!
//! Each component is a pure function of its typed field record to HTML.
//! Field records are parsed once per section from the [`FieldMap`], with
//! a documented default per field, so partially filled tenant content
//! degrades field-by-field to placeholder copy instead of leaving blank
//! regions.

pub(crate) mod auto_garage;
pub(crate) mod marketing;
pub(crate) mod restaurant;

use sw_model::{FieldMap, RenderMode};

use crate::registry::SectionKind;

/// Render one section by kind.
///
/// Dispatch is exhaustive over the known kinds; callers handle unknown
/// identifiers before reaching this point.
pub(crate) fn render_section(kind: SectionKind, fields: &FieldMap, mode: RenderMode) -> String {
    match kind {
        SectionKind::AutoGarageHero => auto_garage::hero(fields, mode),
        SectionKind::AutoGarageServices => auto_garage::services(fields),
        SectionKind::AutoGarageTestimonials => auto_garage::testimonials(fields),
        SectionKind::AutoGarageQuoteForm => auto_garage::quote_form(fields, mode),
        SectionKind::AutoGarageFooter => auto_garage::footer(fields),
        SectionKind::RestaurantHero => restaurant::hero(fields, mode),
        SectionKind::RestaurantMenu => restaurant::menu(fields),
        SectionKind::RestaurantHours => restaurant::hours(fields),
        SectionKind::RestaurantFooter => restaurant::footer(fields),
        SectionKind::MarketingHero => marketing::hero(fields, mode),
        SectionKind::MarketingFeatures => marketing::features(fields),
        SectionKind::MarketingCta => marketing::cta(fields, mode),
        SectionKind::MarketingFooter => marketing::footer(fields),
    }
}
