//! CSS rule rendering

use crate::config::{FilterSettings, SettingValue};
use crate::schedule::DayPhase;

/// Identifier of the injected style node
pub const STYLE_ID: &str = "EyeProtectionFilter";

/// Brightness and sepia applied to the page root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRule {
    /// Brightness percent
    pub brightness: SettingValue,
    /// Sepia percent
    pub sepia: SettingValue,
}

impl FilterRule {
    /// Pick the day or night pair from `settings`
    pub fn for_phase(settings: &FilterSettings, phase: DayPhase) -> Self {
        match phase {
            DayPhase::Day => Self {
                brightness: settings.brightness_day.clone(),
                sepia: settings.sepia_day.clone(),
            },
            DayPhase::Night => Self {
                brightness: settings.brightness_night.clone(),
                sepia: settings.sepia_night.clone(),
            },
        }
    }

    /// Render the rule forcing the filter on the root element
    ///
    /// Values are inserted verbatim.
    pub fn render(&self) -> String {
        format!(
            "html {{ filter: brightness({}%) sepia({}%) !important; \
             transition: filter 0.5s ease-in-out !important; }}",
            self.brightness, self.sepia
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_exact_rule() {
        let rule = FilterRule {
            brightness: SettingValue::Integer(90),
            sepia: SettingValue::Integer(40),
        };
        assert_eq!(
            rule.render(),
            "html { filter: brightness(90%) sepia(40%) !important; \
             transition: filter 0.5s ease-in-out !important; }"
        );
    }

    #[test]
    fn test_for_phase_selects_pair() {
        let settings = FilterSettings::default();

        let day = FilterRule::for_phase(&settings, DayPhase::Day);
        assert_eq!(day.brightness, SettingValue::Integer(90));
        assert_eq!(day.sepia, SettingValue::Integer(40));

        let night = FilterRule::for_phase(&settings, DayPhase::Night);
        assert_eq!(night.brightness, SettingValue::Integer(40));
        assert_eq!(night.sepia, SettingValue::Integer(60));
    }

    #[test]
    fn test_render_text_values_verbatim() {
        let rule = FilterRule {
            brightness: SettingValue::from("85.5"),
            sepia: SettingValue::from("abc"),
        };
        let css = rule.render();
        assert!(css.contains("brightness(85.5%)"));
        assert!(css.contains("sepia(abc%)"));
    }
}
