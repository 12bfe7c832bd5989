//! Card layout rendering.
//!
//! Maps card data to a structured layout description that a client can draw
//! without knowing any card rules. Two themes times two evolution states
//! gives four variants:
//!
//! | Variant            | Persona label     | Quote                     | Badge           |
//! |--------------------|-------------------|---------------------------|-----------------|
//! | `tactical_base`    | `name`            | satirical wit             | `EJ-CARD`       |
//! | `tactical_evolved` | `evolved_name`    | `evolved_description`     | `EVOLVED`       |
//! | `magazine_base`    | `name`            | satirical wit             | `EXEC JOKESTER` |
//! | `magazine_evolved` | `evolved_name`    | `evolved_description`     | none            |
//!
//! Evolved variants also carry the optional custom quote.

use serde::Serialize;

use crate::card::{CardData, CardTheme};

/// Brand shown in card footers.
pub const SITE_HOST: &str = "theexecutivejokester.com";

/// Year stamped into the tactical serial number.
const SERIAL_YEAR: &str = "2024";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutVariant {
    TacticalBase,
    TacticalEvolved,
    MagazineBase,
    MagazineEvolved,
}

/// How the portrait is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFrame {
    /// Round headshot centred on the card.
    Circle,
    /// Portrait fills the card behind a gradient.
    FullBleed,
}

/// Analytics counters of a saved card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardAnalytics {
    pub view_count: i64,
    pub share_count: i64,
    pub engagement_score: i64,
    pub last_shared_by: String,
}

/// The strip of counters drawn along the bottom of a saved card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsBar {
    pub views: i64,
    pub shares: i64,
    pub engagement: i64,
    pub shared_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardLayout {
    pub variant: LayoutVariant,
    pub theme: CardTheme,
    pub is_evolved: bool,
    pub badge: Option<String>,
    pub serial: Option<String>,
    pub image_url: String,
    pub image_frame: ImageFrame,
    pub headline: String,
    pub persona_label: String,
    pub quote: String,
    pub custom_quote: Option<String>,
    pub footer: Option<String>,
    pub analytics: Option<AnalyticsBar>,
}

/// Render `card` using its own theme and evolution flag.
pub fn render_card(card: &CardData, analytics: Option<&CardAnalytics>) -> CardLayout {
    render(card, card.theme, card.is_evolved, analytics)
}

/// Render `card` as `theme` in the given evolution state.
pub fn render(
    card: &CardData,
    theme: CardTheme,
    is_evolved: bool,
    analytics: Option<&CardAnalytics>,
) -> CardLayout {
    let persona = &card.persona;
    let persona_tag = persona.id.to_uppercase();

    let (persona_label, quote) = if is_evolved {
        (persona.evolved_name.clone(), persona.evolved_description.clone())
    } else {
        (persona.name.clone(), card.satirical_wit.clone())
    };

    let custom_quote = if is_evolved {
        card.custom_quote
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_string)
    } else {
        None
    };

    let bar = analytics.map(|a| AnalyticsBar {
        views: a.view_count,
        shares: a.share_count,
        engagement: a.engagement_score,
        shared_by: if a.last_shared_by.is_empty() {
            "N/A".to_string()
        } else {
            a.last_shared_by.clone()
        },
    });

    let (variant, badge, serial, image_frame, footer, analytics) = match (theme, is_evolved) {
        (CardTheme::Tactical, false) => (
            LayoutVariant::TacticalBase,
            Some("EJ-CARD".to_string()),
            Some(tactical_serial(&card.name)),
            ImageFrame::Circle,
            Some(format!("{SITE_HOST} // {persona_tag}")),
            bar,
        ),
        // The evolved tactical card is a hologram; it carries no counters.
        (CardTheme::Tactical, true) => (
            LayoutVariant::TacticalEvolved,
            Some("EVOLVED".to_string()),
            None,
            ImageFrame::Circle,
            Some(format!("{SITE_HOST} // {persona_tag}")),
            None,
        ),
        (CardTheme::Magazine, false) => (
            LayoutVariant::MagazineBase,
            Some("EXEC JOKESTER".to_string()),
            None,
            ImageFrame::FullBleed,
            None,
            bar,
        ),
        (CardTheme::Magazine, true) => (
            LayoutVariant::MagazineEvolved,
            None,
            None,
            ImageFrame::Circle,
            Some(format!("{SITE_HOST} | ID: {persona_tag}")),
            bar,
        ),
    };

    CardLayout {
        variant,
        theme,
        is_evolved,
        badge,
        serial,
        image_url: card.image_url.clone(),
        image_frame,
        headline: card.name.clone(),
        persona_label,
        quote,
        custom_quote,
        footer,
        analytics,
    }
}

/// `ID: JANEDOE-2024` style serial for tactical cards.
fn tactical_serial(name: &str) -> String {
    let compact: String = name.chars().filter(|c| *c != ' ').collect();
    format!("ID: {}-{SERIAL_YEAR}", compact.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona;

    fn card() -> CardData {
        let mut c = CardData::draft(persona::resolve("coffee-badger").clone());
        c.name = "Jane Doe".into();
        c.satirical_wit = "Per my last email, I'm out of coffee.".into();
        c.custom_quote = Some("Decaf is a cry for help.".into());
        c
    }

    fn analytics() -> CardAnalytics {
        CardAnalytics {
            view_count: 12,
            share_count: 3,
            engagement_score: 3,
            last_shared_by: String::new(),
        }
    }

    #[test]
    fn tactical_base_uses_wit_and_serial() {
        let layout = render(&card(), CardTheme::Tactical, false, None);
        assert_eq!(layout.variant, LayoutVariant::TacticalBase);
        assert_eq!(layout.persona_label, "Coffee Badger");
        assert_eq!(layout.quote, "Per my last email, I'm out of coffee.");
        assert_eq!(layout.serial.as_deref(), Some("ID: JANEDOE-2024"));
        assert_eq!(
            layout.footer.as_deref(),
            Some("theexecutivejokester.com // COFFEE-BADGER")
        );
        assert_eq!(layout.custom_quote, None);
        assert_eq!(layout.analytics, None);
    }

    #[test]
    fn tactical_evolved_uses_evolved_fields_and_hides_counters() {
        let layout = render(&card(), CardTheme::Tactical, true, Some(&analytics()));
        assert_eq!(layout.variant, LayoutVariant::TacticalEvolved);
        assert_eq!(layout.persona_label, "Caffeine Overlord");
        assert!(layout.quote.starts_with("Has ascended"));
        assert_eq!(layout.custom_quote.as_deref(), Some("Decaf is a cry for help."));
        assert_eq!(layout.analytics, None);
    }

    #[test]
    fn magazine_base_is_full_bleed() {
        let layout = render(&card(), CardTheme::Magazine, false, Some(&analytics()));
        assert_eq!(layout.variant, LayoutVariant::MagazineBase);
        assert_eq!(layout.image_frame, ImageFrame::FullBleed);
        assert_eq!(layout.badge.as_deref(), Some("EXEC JOKESTER"));
        assert_eq!(layout.footer, None);
        let bar = layout.analytics.unwrap();
        assert_eq!(bar.views, 12);
        assert_eq!(bar.shared_by, "N/A");
    }

    #[test]
    fn magazine_evolved_footer_carries_persona_id() {
        let layout = render(&card(), CardTheme::Magazine, true, None);
        assert_eq!(layout.variant, LayoutVariant::MagazineEvolved);
        assert_eq!(layout.badge, None);
        assert_eq!(
            layout.footer.as_deref(),
            Some("theexecutivejokester.com | ID: COFFEE-BADGER")
        );
    }

    #[test]
    fn render_card_follows_card_flags() {
        let mut c = card();
        c.theme = CardTheme::Magazine;
        c.is_evolved = true;
        assert_eq!(render_card(&c, None).variant, LayoutVariant::MagazineEvolved);
    }

    #[test]
    fn blank_custom_quote_is_omitted() {
        let mut c = card();
        c.custom_quote = Some(String::new());
        assert_eq!(render(&c, CardTheme::Tactical, true, None).custom_quote, None);
    }

    #[test]
    fn empty_name_renders_empty_headline() {
        let mut c = card();
        c.name = String::new();
        let layout = render(&c, CardTheme::Tactical, false, None);
        assert_eq!(layout.headline, "");
        assert_eq!(layout.serial.as_deref(), Some("ID: -2024"));
    }
}
