//! Closed set of effect identifiers known to load in the target application.
//!
//! Identifiers starting with `.../` are the application's own namespaced motion templates; the
//! rest are built-in filter and transition plug-ins.

/// What an effect is used for on a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectCategory {
    /// Text title template.
    Title,
    /// Generator (solid, background, shape).
    Generator,
    /// Video filter applied to a clip.
    Filter,
    /// Transition between two clips.
    Transition,
}

/// Catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectDescriptor {
    /// Verified identifier.
    pub uid: &'static str,
    /// Default display name.
    pub name: &'static str,
    /// Usage category.
    pub category: EffectCategory,
}

const fn entry(
    uid: &'static str,
    name: &'static str,
    category: EffectCategory,
) -> EffectDescriptor {
    EffectDescriptor {
        uid,
        name,
        category,
    }
}

const CATALOG: &[EffectDescriptor] = &[
    entry(
        ".../Titles.localized/Basic Text.localized/Text.localized/Text.moti",
        "Text",
        EffectCategory::Title,
    ),
    entry(
        ".../Titles.localized/Bumper:Opener.localized/Basic Title.localized/Basic Title.moti",
        "Basic Title",
        EffectCategory::Title,
    ),
    entry(
        ".../Titles.localized/Lower Thirds.localized/Basic Lower Third.localized/Basic Lower Third.moti",
        "Basic Lower Third",
        EffectCategory::Title,
    ),
    entry(
        ".../Titles.localized/Credits.localized/Scrolling.localized/Scrolling.moti",
        "Scrolling",
        EffectCategory::Title,
    ),
    entry(
        ".../Generators.localized/Solids.localized/Vivid.localized/Vivid.motn",
        "Vivid",
        EffectCategory::Generator,
    ),
    entry(
        ".../Generators.localized/Solids.localized/Custom.localized/Custom.motn",
        "Custom",
        EffectCategory::Generator,
    ),
    entry(
        ".../Generators.localized/Elements.localized/Shapes.localized/Shapes.motn",
        "Shapes",
        EffectCategory::Generator,
    ),
    entry(
        ".../Generators.localized/Backgrounds.localized/Blobs.localized/Blobs.motn",
        "Blobs",
        EffectCategory::Generator,
    ),
    entry("FFGaussianBlur", "Gaussian Blur", EffectCategory::Filter),
    entry("FFZoomBlur", "Zoom Blur", EffectCategory::Filter),
    entry("FFSharpen", "Sharpen", EffectCategory::Filter),
    entry("FFColorAdjustments", "Color Adjustments", EffectCategory::Filter),
    entry(
        "FxPlug:4731E73A-8DAC-4113-9A30-AE85B1761265",
        "Cross Dissolve",
        EffectCategory::Transition,
    ),
];

/// Look up a verified identifier.
pub fn lookup_effect(uid: &str) -> Option<&'static EffectDescriptor> {
    CATALOG.iter().find(|d| d.uid == uid)
}

/// Every verified identifier, in catalog order.
pub fn verified_effects() -> &'static [EffectDescriptor] {
    CATALOG
}

#[cfg(test)]
#[path = "../../tests/unit/resources/catalog.rs"]
mod tests;
