/// Closed enum with a stable string code per variant.
///
/// The code is what categorical filters compare against and what the serde
/// representation emits (`snake_case`), so a filter value coming from a
/// `<select>` and a record field always agree.
pub trait CodeEnum: Sized + Copy + PartialEq + 'static {
    /// All variants in display order
    fn all() -> &'static [Self];

    /// Stable machine code, e.g. `"in_progress"`
    fn code(&self) -> &'static str;

    /// Human readable label
    fn display_name(&self) -> &'static str;

    /// Parse from code; `None` for anything outside the closed set
    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record_list::test_support::Stage;

    #[test]
    fn test_from_code_roundtrips_every_variant() {
        for stage in Stage::all() {
            assert_eq!(Stage::from_code(stage.code()), Some(*stage));
        }
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(Stage::from_code("archived"), None);
        assert_eq!(Stage::from_code(""), None);
        assert_eq!(Stage::from_code("DONE"), None);
    }
}
