//! Projection of a [`SearchResponse`] into a displayable fragment.
//!
//! Rendering never fails: missing name parts become `""` and missing term
//! fields become `"N/A"`.

use std::fmt;

use crate::search::{PoliticianRecord, SearchResponse};

/// One heading followed by zero or more cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub heading: String,
    pub cards: Vec<Card>,
}

/// A single politician card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// `"{first} {last}"`, keeping the separator even when a part is empty
    pub name: String,
    pub source: String,
    /// Present iff the record carried a `terms` array (even an empty one)
    pub latest_position: Option<LatestPosition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestPosition {
    pub kind: String,
    pub state: String,
}

/// Render a response.
///
/// Only `count` decides whether cards are rendered: an explicit zero shows
/// the heading alone, anything else (including a missing count) turns every
/// entry of `results` into a card, whatever its length.
#[must_use]
pub fn render(response: &SearchResponse) -> Fragment {
    let cards = if response.count == Some(0) {
        Vec::new()
    } else {
        response.results.iter().map(Card::from_record).collect()
    };

    Fragment {
        heading: response.message.clone(),
        cards,
    }
}

impl Card {
    #[must_use]
    pub fn from_record(record: &PoliticianRecord) -> Self {
        let latest_position = record.terms.as_ref().map(|_| {
            record.latest_term().map_or_else(
                || LatestPosition {
                    kind: "N/A".to_string(),
                    state: "N/A".to_string(),
                },
                |term| LatestPosition {
                    kind: term.kind_or_na().to_string(),
                    state: term.state_or_na().to_string(),
                },
            )
        });

        Self {
            name: format!("{} {}", record.first_name(), record.last_name()),
            source: record.data_source.clone(),
            latest_position,
        }
    }

    /// `Source: ...` line.
    #[must_use]
    pub fn source_line(&self) -> String {
        format!("Source: {}", self.source)
    }

    /// `Latest position: ...` line, if any.
    #[must_use]
    pub fn position_line(&self) -> Option<String> {
        self.latest_position
            .as_ref()
            .map(|p| format!("Latest position: {} ({})", p.kind, p.state))
    }

    fn write_html(&self, out: &mut String) {
        out.push_str("<div class=\"politician-card\">");
        push_element(out, "<h2>", &self.name, "</h2>");
        push_element(
            out,
            "<p class=\"politician-info\">",
            &self.source_line(),
            "</p>",
        );
        if let Some(line) = self.position_line() {
            push_element(out, "<p class=\"politician-info\">", &line, "</p>");
        }
        out.push_str("</div>");
    }
}

impl Fragment {
    /// HTML markup for the results container.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        push_element(&mut out, "<h2>", &self.heading, "</h2>");
        for card in &self.cards {
            out.push('\n');
            card.write_html(&mut out);
        }
        out
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.heading)?;
        for card in &self.cards {
            write!(f, "\n\n{}\n  {}", card.name, card.source_line())?;
            if let Some(line) = card.position_line() {
                write!(f, "\n  {line}")?;
            }
        }
        Ok(())
    }
}

fn push_element(out: &mut String, open: &str, text: &str, close: &str) {
    out.push_str(open);
    out.push_str(&escape_html(text));
    out.push_str(close);
}

/// Escape text for inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
