//! Style sheet derived from a theme
//!
//! Screens don't read raw palette entries for common surfaces; they look up a
//! named [`Style`] from the [`StyleSheet`] built for the active theme.

use super::color::Color;
use super::role::ColorRole;
use super::Theme;
use serde::Serialize;

/// Layout constants shared by every theme
pub struct Metrics;

impl Metrics {
    pub const RADIUS_SMALL: f32 = 8.0;
    pub const RADIUS_MEDIUM: f32 = 12.0;
    pub const RADIUS_LARGE: f32 = 16.0;

    pub const PADDING: f32 = 16.0;
    pub const PADDING_CARD: f32 = 20.0;
    pub const PADDING_BUTTON_H: f32 = 24.0;
    pub const PADDING_BUTTON_V: f32 = 12.0;

    pub const MARGIN_V: f32 = 8.0;
    pub const MARGIN_H: f32 = 16.0;

    pub const FONT_BODY: f32 = 16.0;
    pub const FONT_SMALL: f32 = 14.0;
    pub const WEIGHT_SEMIBOLD: u16 = 600;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleKey {
    Container,
    Surface,
    Text,
    TextSecondary,
    Button,
    ButtonText,
    Input,
    Card,
}

impl StyleKey {
    pub const ALL: [StyleKey; 8] = [
        Self::Container,
        Self::Surface,
        Self::Text,
        Self::TextSecondary,
        Self::Button,
        Self::ButtonText,
        Self::Input,
        Self::Card,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Align {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: Color,
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
    pub radius: f32,
    pub elevation: u8,
}

/// A single named style. Unset properties are omitted from serialized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_vertical: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_horizontal: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Align>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSheet {
    pub container: Style,
    pub surface: Style,
    pub text: Style,
    pub text_secondary: Style,
    pub button: Style,
    pub button_text: Style,
    pub input: Style,
    pub card: Style,
}

impl StyleSheet {
    pub fn for_theme(theme: &Theme) -> Self {
        let c = |role: ColorRole| Some(theme.color(role));

        Self {
            container: Style {
                flex: Some(1.0),
                background_color: c(ColorRole::Background),
                ..Style::default()
            },
            surface: Style {
                background_color: c(ColorRole::Surface),
                border_radius: Some(Metrics::RADIUS_MEDIUM),
                padding: Some(Metrics::PADDING),
                margin_vertical: Some(Metrics::MARGIN_V),
                margin_horizontal: Some(Metrics::MARGIN_H),
                ..Style::default()
            },
            text: Style {
                color: c(ColorRole::Text),
                font_size: Some(Metrics::FONT_BODY),
                ..Style::default()
            },
            text_secondary: Style {
                color: c(ColorRole::TextSecondary),
                font_size: Some(Metrics::FONT_SMALL),
                ..Style::default()
            },
            button: Style {
                background_color: c(ColorRole::Primary),
                padding_horizontal: Some(Metrics::PADDING_BUTTON_H),
                padding_vertical: Some(Metrics::PADDING_BUTTON_V),
                border_radius: Some(Metrics::RADIUS_SMALL),
                align_items: Some(Align::Center),
                ..Style::default()
            },
            // Button labels sit on the primary color, so they take the surface color
            button_text: Style {
                color: c(ColorRole::Surface),
                font_size: Some(Metrics::FONT_BODY),
                font_weight: Some(Metrics::WEIGHT_SEMIBOLD),
                ..Style::default()
            },
            input: Style {
                background_color: c(ColorRole::Surface),
                border_color: c(ColorRole::Border),
                border_width: Some(1.0),
                border_radius: Some(Metrics::RADIUS_SMALL),
                padding_horizontal: Some(Metrics::PADDING),
                padding_vertical: Some(Metrics::PADDING_BUTTON_V),
                color: c(ColorRole::Text),
                font_size: Some(Metrics::FONT_BODY),
                ..Style::default()
            },
            card: Style {
                background_color: c(ColorRole::Surface),
                border_radius: Some(Metrics::RADIUS_LARGE),
                padding: Some(Metrics::PADDING_CARD),
                margin_vertical: Some(Metrics::MARGIN_V),
                margin_horizontal: Some(Metrics::MARGIN_H),
                shadow: Some(Shadow {
                    color: theme.color(ColorRole::Primary),
                    offset_x: 0.0,
                    offset_y: 2.0,
                    opacity: 0.1,
                    radius: 4.0,
                    elevation: 3,
                }),
                ..Style::default()
            },
        }
    }

    pub fn get(&self, key: StyleKey) -> &Style {
        match key {
            StyleKey::Container => &self.container,
            StyleKey::Surface => &self.surface,
            StyleKey::Text => &self.text,
            StyleKey::TextSecondary => &self.text_secondary,
            StyleKey::Button => &self.button,
            StyleKey::ButtonText => &self.button_text,
            StyleKey::Input => &self.input,
            StyleKey::Card => &self.card,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Mode, Palette};

    #[test]
    fn test_colors_follow_theme() {
        let dark = Theme::new(Mode::Dark, Palette::dark());
        let sheet = StyleSheet::for_theme(&dark);

        assert_eq!(
            sheet.container.background_color,
            Some(dark.color(ColorRole::Background))
        );
        assert_eq!(sheet.button.background_color, Some(dark.color(ColorRole::Primary)));
        assert_eq!(sheet.button_text.color, Some(dark.color(ColorRole::Surface)));
        assert_eq!(sheet.input.border_color, Some(dark.color(ColorRole::Border)));
        assert_eq!(
            sheet.card.shadow.map(|s| s.color),
            Some(dark.color(ColorRole::Primary))
        );
    }

    #[test]
    fn test_layout_is_theme_independent() {
        let light = StyleSheet::for_theme(&Theme::new(Mode::Light, Palette::light()));
        let dark = StyleSheet::for_theme(&Theme::new(Mode::Dark, Palette::dark()));

        for key in StyleKey::ALL {
            let (l, d) = (light.get(key), dark.get(key));
            assert_eq!(l.border_radius, d.border_radius, "{key:?}");
            assert_eq!(l.padding, d.padding, "{key:?}");
            assert_eq!(l.font_size, d.font_size, "{key:?}");
        }
        assert_ne!(light, dark);
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let sheet = StyleSheet::for_theme(&Theme::new(Mode::Light, Palette::light()));
        let json = serde_json::to_value(&sheet).unwrap();

        assert_eq!(json["textSecondary"]["color"], "#64748b");
        assert_eq!(json["buttonText"]["fontWeight"], 600);
        assert_eq!(json["button"]["alignItems"], "center");
        assert_eq!(json["card"]["shadow"]["offsetY"], 2.0);
        assert!(json["text"].get("backgroundColor").is_none());
    }
}
