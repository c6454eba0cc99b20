use super::code_enum::CodeEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Colour token of a chip or card. The frontend maps it onto its badge palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Brand,
    Success,
    Warning,
    Danger,
    Informative,
    /// Neutral grey, also the fallback tone
    Subtle,
}

impl Tone {
    pub fn code(&self) -> &'static str {
        match self {
            Tone::Brand => "brand",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Informative => "informative",
            Tone::Subtle => "subtle",
        }
    }
}

/// (colour, icon) pair used purely for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Presentation {
    pub tone: Tone,
    pub icon: &'static str,
}

impl Presentation {
    /// Returned for any value outside the known set
    pub const DEFAULT: Presentation = Presentation {
        tone: Tone::Subtle,
        icon: "circle",
    };

    pub const fn new(tone: Tone, icon: &'static str) -> Self {
        Self { tone, icon }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Enum attribute with a specific presentation for every variant.
pub trait Presentable: CodeEnum {
    fn presentation(&self) -> Presentation;
}

/// Look up the presentation of a raw code; unknown codes get
/// [`Presentation::DEFAULT`].
pub fn present_code<E: Presentable>(code: &str) -> Presentation {
    E::from_code(code)
        .map(|v| v.presentation())
        .unwrap_or(Presentation::DEFAULT)
}

/// Key used for the fallback row of [`presentation_table`].
pub const DEFAULT_KEY: &str = "default";

/// Enum-keyed lookup table with an explicit default entry.
pub fn presentation_table<E: Presentable>() -> BTreeMap<&'static str, Presentation> {
    let mut table: BTreeMap<&'static str, Presentation> = E::all()
        .iter()
        .map(|v| (v.code(), v.presentation()))
        .collect();
    table.insert(DEFAULT_KEY, Presentation::DEFAULT);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::test_support::Stage;

    #[test]
    fn test_every_variant_has_specific_presentation() {
        for stage in Stage::all() {
            let p = present_code::<Stage>(stage.code());
            assert!(!p.is_default(), "{} fell back to default", stage.code());
            assert_eq!(p, stage.presentation());
        }
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(present_code::<Stage>("archived"), Presentation::DEFAULT);
        assert_eq!(present_code::<Stage>(""), Presentation::DEFAULT);
        assert_eq!(present_code::<Stage>("DONE"), Presentation::DEFAULT);
    }

    #[test]
    fn test_mapper_is_pure() {
        assert_eq!(present_code::<Stage>("done"), present_code::<Stage>("done"));
    }

    #[test]
    fn test_presentation_table() {
        let table = presentation_table::<Stage>();
        assert_eq!(table.len(), Stage::all().len() + 1);
        assert_eq!(table.get(DEFAULT_KEY), Some(&Presentation::DEFAULT));
        assert_eq!(table.get("done").map(|p| p.tone), Some(Tone::Success));
    }
}
