//! Class colors - display colors and icons for the playable classes

use serde::Serialize;

/// Base URL for class icons
pub const CLASS_ICON_BASE_URL: &str = "https://wow.zamimg.com/images/wow/icons/large";

/// Display descriptor for a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassColor {
    /// Display name
    pub name: &'static str,
    /// Semantic color key
    pub color: &'static str,
    pub hex: &'static str,
    /// CSS class for text
    pub text_class: &'static str,
    /// CSS class for backgrounds
    pub bg_class: &'static str,
}

const fn entry(
    name: &'static str,
    color: &'static str,
    hex: &'static str,
    text_class: &'static str,
    bg_class: &'static str,
) -> ClassColor {
    ClassColor {
        name,
        color,
        hex,
        text_class,
        bg_class,
    }
}

const CLASS_COLORS: [ClassColor; 13] = [
    entry("Death Knight", "deathknight", "#C41E3A", "text-wow-deathknight", "bg-wow-deathknight"),
    entry("Demon Hunter", "demonhunter", "#A330C9", "text-wow-demonhunter", "bg-wow-demonhunter"),
    entry("Druid", "druid", "#FF7C0A", "text-wow-druid", "bg-wow-druid"),
    entry("Evoker", "evoker", "#33937F", "text-wow-evoker", "bg-wow-evoker"),
    entry("Hunter", "hunter", "#AAD372", "text-wow-hunter", "bg-wow-hunter"),
    entry("Mage", "mage", "#3FC7EB", "text-wow-mage", "bg-wow-mage"),
    entry("Monk", "monk", "#00FF98", "text-wow-monk", "bg-wow-monk"),
    entry("Paladin", "paladin", "#F48CBA", "text-wow-paladin", "bg-wow-paladin"),
    entry("Priest", "priest", "#FFFFFF", "text-wow-priest", "bg-wow-priest"),
    entry("Rogue", "rogue", "#FFF468", "text-wow-rogue", "bg-wow-rogue"),
    entry("Shaman", "shaman", "#0070DD", "text-wow-shaman", "bg-wow-shaman"),
    entry("Warlock", "warlock", "#8788EE", "text-wow-warlock", "bg-wow-warlock"),
    entry("Warrior", "warrior", "#C69B6D", "text-wow-warrior", "bg-wow-warrior"),
];

const UNKNOWN: ClassColor = entry("Unknown", "gray", "#808080", "text-gray-400", "bg-gray-400");

/// Color descriptor for a class name; unknown names get the gray fallback
pub fn class_color(class_name: &str) -> ClassColor {
    CLASS_COLORS
        .iter()
        .find(|entry| entry.name == class_name)
        .copied()
        .unwrap_or(UNKNOWN)
}

/// Icon URL for a class name. The icon is not checked for existence.
pub fn class_icon_url(class_name: &str) -> String {
    let normalized: String = class_name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    format!("{CLASS_ICON_BASE_URL}/classicon_{normalized}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_classes() {
        let expected = [
            ("Death Knight", "#C41E3A", "text-wow-deathknight", "bg-wow-deathknight"),
            ("Demon Hunter", "#A330C9", "text-wow-demonhunter", "bg-wow-demonhunter"),
            ("Druid", "#FF7C0A", "text-wow-druid", "bg-wow-druid"),
            ("Evoker", "#33937F", "text-wow-evoker", "bg-wow-evoker"),
            ("Hunter", "#AAD372", "text-wow-hunter", "bg-wow-hunter"),
            ("Mage", "#3FC7EB", "text-wow-mage", "bg-wow-mage"),
            ("Monk", "#00FF98", "text-wow-monk", "bg-wow-monk"),
            ("Paladin", "#F48CBA", "text-wow-paladin", "bg-wow-paladin"),
            ("Priest", "#FFFFFF", "text-wow-priest", "bg-wow-priest"),
            ("Rogue", "#FFF468", "text-wow-rogue", "bg-wow-rogue"),
            ("Shaman", "#0070DD", "text-wow-shaman", "bg-wow-shaman"),
            ("Warlock", "#8788EE", "text-wow-warlock", "bg-wow-warlock"),
            ("Warrior", "#C69B6D", "text-wow-warrior", "bg-wow-warrior"),
        ];

        for (name, hex, text, bg) in expected {
            let color = class_color(name);
            assert_eq!(color.name, name);
            assert_eq!(color.hex, hex);
            assert_eq!(color.text_class, text);
            assert_eq!(color.bg_class, bg);
        }
    }

    #[test]
    fn test_unknown_class_falls_back_to_gray() {
        let color = class_color("Bard");
        assert_eq!(color.name, "Unknown");
        assert_eq!(color.color, "gray");
        assert_eq!(color.hex, "#808080");
        assert_eq!(color.text_class, "text-gray-400");
        assert_eq!(color.bg_class, "bg-gray-400");

        assert_eq!(class_color(""), class_color("Bard"));
    }

    #[test]
    fn test_class_icon_url() {
        assert_eq!(
            class_icon_url("Death Knight"),
            "https://wow.zamimg.com/images/wow/icons/large/classicon_deathknight.jpg"
        );
        // no existence check
        assert_eq!(
            class_icon_url("Bard"),
            "https://wow.zamimg.com/images/wow/icons/large/classicon_bard.jpg"
        );
    }
}
