//! Color palettes
//!
//! A [`Palette`] always holds a color for every [`ColorRole`]; incomplete
//! definitions are rejected when the palette is built, so lookups never miss.

use super::color::Color;
use super::role::ColorRole;
use crate::error::{InkError, InkResult};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::ops::Index;

/// Built-in light palette, in [`ColorRole::ALL`] order
const LIGHT: [Color; ColorRole::COUNT] = [
    Color::rgb(0x1a, 0x1a, 0x1a), // primary: ink
    Color::rgb(0x00, 0xff, 0x88), // secondary: neon
    Color::rgb(0xf8, 0xfa, 0xfc), // background
    Color::rgb(0xff, 0xff, 0xff), // surface
    Color::rgb(0x1e, 0x29, 0x3b), // text
    Color::rgb(0x64, 0x74, 0x8b), // textSecondary
    Color::rgb(0xe2, 0xe8, 0xf0), // border
    Color::rgb(0x10, 0xb9, 0x81), // success
    Color::rgb(0xf5, 0x9e, 0x0b), // warning
    Color::rgb(0xef, 0x44, 0x44), // error
];

/// Built-in dark palette, in [`ColorRole::ALL`] order
const DARK: [Color; ColorRole::COUNT] = [
    Color::rgb(0x00, 0xff, 0x88), // primary: neon
    Color::rgb(0x1a, 0x1a, 0x1a), // secondary: ink
    Color::rgb(0x0f, 0x17, 0x2a), // background
    Color::rgb(0x1e, 0x29, 0x3b), // surface
    Color::rgb(0xf1, 0xf5, 0xf9), // text
    Color::rgb(0x94, 0xa3, 0xb8), // textSecondary
    Color::rgb(0x33, 0x41, 0x55), // border
    Color::rgb(0x10, 0xb9, 0x81), // success
    Color::rgb(0xf5, 0x9e, 0x0b), // warning
    Color::rgb(0xef, 0x44, 0x44), // error
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Color; ColorRole::COUNT],
}

impl Palette {
    pub fn light() -> Self {
        Self { colors: LIGHT }
    }

    pub fn dark() -> Self {
        Self { colors: DARK }
    }

    /// Build from role/color pairs. Later entries win; every role must appear.
    pub fn from_entries(
        name: &str,
        entries: impl IntoIterator<Item = (ColorRole, Color)>,
    ) -> InkResult<Self> {
        let mut slots: [Option<Color>; ColorRole::COUNT] = [None; ColorRole::COUNT];
        for (role, color) in entries {
            slots[role.index()] = Some(color);
        }

        let mut colors = [Color::rgb(0, 0, 0); ColorRole::COUNT];
        for role in ColorRole::ALL {
            colors[role.index()] =
                slots[role.index()].ok_or_else(|| InkError::missing_role(name, role))?;
        }
        Ok(Self { colors })
    }

    /// Build from a role-name to hex-string table, as found in palette files
    pub fn from_hex_table(name: &str, table: &BTreeMap<String, String>) -> InkResult<Self> {
        let entries = table
            .iter()
            .map(|(role, hex)| -> InkResult<(ColorRole, Color)> {
                Ok((role.parse()?, Color::from_hex(hex)?))
            })
            .collect::<InkResult<Vec<_>>>()?;
        Self::from_entries(name, entries)
    }

    pub fn get(&self, role: ColorRole) -> Color {
        self.colors[role.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

impl Index<ColorRole> for Palette {
    type Output = Color;

    fn index(&self, role: ColorRole) -> &Color {
        &self.colors[role.index()]
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ColorRole::COUNT))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.as_str(), &color)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_builtin_palettes_differ_only_where_expected() {
        let light = Palette::light();
        let dark = Palette::dark();

        assert_eq!(light[ColorRole::Primary], dark[ColorRole::Secondary]);
        assert_eq!(light[ColorRole::Secondary], dark[ColorRole::Primary]);
        for role in [ColorRole::Success, ColorRole::Warning, ColorRole::Error] {
            assert_eq!(light[role], dark[role]);
        }
        assert_ne!(light[ColorRole::Background], dark[ColorRole::Background]);
    }

    #[test]
    fn test_builtin_values() {
        let light = Palette::light();
        assert_eq!(light.get(ColorRole::Background).to_hex(), "#f8fafc");
        assert_eq!(light.get(ColorRole::Border).to_hex(), "#e2e8f0");

        let dark = Palette::dark();
        assert_eq!(dark.get(ColorRole::Background).to_hex(), "#0f172a");
        assert_eq!(dark.get(ColorRole::TextSecondary).to_hex(), "#94a3b8");
    }

    #[test]
    fn test_from_entries_requires_every_role() {
        let entries = Palette::light()
            .iter()
            .filter(|(role, _)| *role != ColorRole::Warning)
            .collect::<Vec<_>>();

        let err = Palette::from_entries("custom", entries).unwrap_err();
        match err {
            InkError::MissingRole { palette, role } => {
                assert_eq!(palette, "custom");
                assert_eq!(role, "warning");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_entries_round_trips_builtin() {
        let rebuilt = Palette::from_entries("dark", Palette::dark().iter()).unwrap();
        assert_eq!(rebuilt, Palette::dark());
    }

    #[test]
    fn test_from_hex_table() {
        let mut source = table(&[]);
        for (role, color) in Palette::dark().iter() {
            source.insert(role.as_str().to_string(), color.to_hex());
        }
        source.insert("primary".to_string(), "#ff00ff".to_string());

        let palette = Palette::from_hex_table("dark", &source).unwrap();
        assert_eq!(palette[ColorRole::Primary], Color::rgb(0xff, 0x00, 0xff));
        assert_eq!(palette[ColorRole::Surface], Palette::dark()[ColorRole::Surface]);
    }

    #[test]
    fn test_from_hex_table_rejects_unknown_role_and_bad_color() {
        let err = Palette::from_hex_table("x", &table(&[("accent", "#ffffff")])).unwrap_err();
        assert!(matches!(err, InkError::UnknownRole(_)));

        let err = Palette::from_hex_table("x", &table(&[("primary", "blue")])).unwrap_err();
        assert!(matches!(err, InkError::InvalidColor(_)));
    }

    #[test]
    fn test_serialize_lists_every_role() {
        let json = serde_json::to_value(Palette::light()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), ColorRole::COUNT);
        for role in ColorRole::ALL {
            assert!(object.contains_key(role.as_str()), "missing {role}");
        }
    }
}
