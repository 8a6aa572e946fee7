//! Implicit defaults derived after all EditorConfig files are merged

use crate::property::Property;
use crate::section::Section;

/// First EditorConfig version where `indent_style=tab` implies `indent_size=tab`.
pub const TAB_INDENT_SIZE_SINCE: &str = "0.9.0";

/// Fill in `indent_size` and `tab_width` from each other.
///
/// Properties already present are never overwritten.
///
/// `version` is compared as a plain string, so `"0.10.0"` sorts before
/// `"0.9.0"`. `None` means the latest version.
pub fn apply_defaults(section: &mut Section, version: Option<&str>) {
    if section.get("indent_style") == "tab" {
        if let Some(tab_width) = section.lookup("tab_width").cloned() {
            section.add([Property {
                name: "indent_size".to_string(),
                value: tab_width.value,
            }]);
        }
        let supports_tab_size = version.map_or(true, |v| v >= TAB_INDENT_SIZE_SINCE);
        if supports_tab_size {
            section.add([Property {
                name: "indent_size".to_string(),
                value: "tab".to_string(),
            }]);
        }
    } else if section.lookup("tab_width").is_none() {
        if let Some(indent_size) = section.lookup("indent_size").cloned() {
            if indent_size.value != "tab" {
                section.add([Property {
                    name: "tab_width".to_string(),
                    value: indent_size.value,
                }]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(props: &[(&str, &str)]) -> Section {
        let mut section = Section::default();
        section.add(props.iter().map(|(k, v)| Property::new(k, v)));
        section
    }

    fn derived(props: &[(&str, &str)], version: Option<&str>) -> Section {
        let mut section = section(props);
        apply_defaults(&mut section, version);
        section
    }

    #[test]
    fn test_tab_style_takes_indent_size_from_tab_width() {
        for version in [None, Some("0.8.0"), Some("0.9.0")] {
            let result = derived(&[("indent_style", "tab"), ("tab_width", "8")], version);
            assert_eq!(result.get("indent_size"), "8", "version {version:?}");
        }
    }

    #[test]
    fn test_tab_style_defaults_indent_size_to_tab() {
        let result = derived(&[("indent_style", "tab")], None);
        assert_eq!(result.get("indent_size"), "tab");

        let result = derived(&[("indent_style", "tab")], Some("0.9.0"));
        assert_eq!(result.get("indent_size"), "tab");
    }

    #[test]
    fn test_old_version_has_no_tab_indent_size() {
        let result = derived(&[("indent_style", "tab")], Some("0.8.0"));
        assert!(result.lookup("indent_size").is_none());
    }

    #[test]
    fn test_version_compares_as_string() {
        // "0.10.0" < "0.9.0" lexically, so it behaves like an old version
        let result = derived(&[("indent_style", "tab")], Some("0.10.0"));
        assert!(result.lookup("indent_size").is_none());
    }

    #[test]
    fn test_tab_style_keeps_explicit_indent_size() {
        let result = derived(
            &[("indent_style", "tab"), ("indent_size", "4"), ("tab_width", "8")],
            None,
        );
        assert_eq!(result.get("indent_size"), "4");
        assert_eq!(result.get("tab_width"), "8");
    }

    #[test]
    fn test_tab_style_does_not_add_tab_width() {
        let result = derived(&[("indent_style", "tab"), ("indent_size", "4")], None);
        assert!(result.lookup("tab_width").is_none());
    }

    #[test]
    fn test_tab_width_defaults_to_indent_size() {
        let result = derived(&[("indent_style", "space"), ("indent_size", "2")], None);
        assert_eq!(result.get("tab_width"), "2");

        let result = derived(&[("indent_size", "3")], None);
        assert_eq!(result.get("tab_width"), "3");
    }

    #[test]
    fn test_indent_size_tab_does_not_set_tab_width() {
        let result = derived(&[("indent_size", "tab")], None);
        assert!(result.lookup("tab_width").is_none());
    }

    #[test]
    fn test_explicit_tab_width_is_kept() {
        let result = derived(&[("indent_size", "2"), ("tab_width", "4")], None);
        assert_eq!(result.get("tab_width"), "4");
    }

    #[test]
    fn test_empty_set_stays_empty() {
        assert!(derived(&[], None).is_empty());
    }
}
