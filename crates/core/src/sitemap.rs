//! XML sitemap generation for the public pages.

use std::io::{self, Write};

use chrono::SecondsFormat;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::CoreError;
use crate::types::{CardId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
}

impl ChangeFreq {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: Timestamp,
    pub change_freq: ChangeFreq,
    pub priority: f32,
}

/// Sitemap entries for the site root, the leaderboard, and every card.
///
/// Cards use their creation time as `lastmod`; static pages use `now`.
pub fn entries(
    base_url: &str,
    now: Timestamp,
    cards: &[(CardId, Timestamp)],
) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');

    let mut out = vec![
        SitemapEntry {
            loc: base.to_string(),
            last_modified: now,
            change_freq: ChangeFreq::Daily,
            priority: 1.0,
        },
        SitemapEntry {
            loc: format!("{base}/leaderboard"),
            last_modified: now,
            change_freq: ChangeFreq::Daily,
            priority: 0.8,
        },
    ];

    out.extend(cards.iter().map(|(id, created_at)| SitemapEntry {
        loc: format!("{base}/card/{id}"),
        last_modified: *created_at,
        change_freq: ChangeFreq::Weekly,
        priority: 0.6,
    }));

    out
}

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Serialize entries as a sitemaps.org `urlset` document.
pub fn to_xml(entries: &[SitemapEntry]) -> Result<String, CoreError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_urlset(&mut writer, entries)
        .map_err(|e| CoreError::Internal(format!("Failed to write sitemap: {e}")))?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| CoreError::Internal(format!("Sitemap is not UTF-8: {e}")))?;
    xml.push('\n');
    Ok(xml)
}

fn write_urlset<W: Write>(writer: &mut Writer<W>, entries: &[SitemapEntry]) -> io::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
    ))?;
    for e in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text(writer, "loc", &e.loc)?;
        write_text(
            writer,
            "lastmod",
            &e.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        write_text(writer, "changefreq", e.change_freq.as_str())?;
        write_text(writer, "priority", &format!("{:.1}", e.priority))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("urlset")))
}

/// `<name>text</name>`; the text is escaped by the writer.
fn write_text<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))
}
