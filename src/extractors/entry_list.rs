// src/extractors/entry_list.rs

use std::collections::HashMap;

use crate::extractors::patterns::{
    content_lines, is_boilerplate, normalize_space, parse_seed, EVENT_RE, NAME_RE, ROW_RE,
};
use crate::models::{Entry, Event, Gender, MasterData};

/// A data row broken into the fields the output needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub athlete_name: String,
    pub seed_order: u64,
    pub org_code: String,
}

/// Recognizes the event header on the first line of a page.
/// Returns `None` for anything that is not `男子 ...` / `女子 ...`.
pub fn recognize_event(line: &str) -> Option<(Gender, String)> {
    let caps = EVENT_RE.captures(line)?;
    let gender = Gender::from_token(caps.get(1)?.as_str())?;
    let event_name = normalize_space(caps.get(2)?.as_str());
    Some((gender, event_name))
}

/// Decomposes one raw line into name, seed rank and org code.
/// Boilerplate and anything without the expected shape yield `None`.
pub fn recognize_row(line: &str) -> Option<ParsedRow> {
    if is_boilerplate(line) {
        return None;
    }
    let caps = ROW_RE.captures(line)?;
    let body = normalize_space(&caps["body"]);
    let name = NAME_RE.captures(&body)?;
    Some(ParsedRow {
        athlete_name: normalize_space(&name["name"]),
        seed_order: parse_seed(&caps["seed"])?,
        org_code: caps["code"].to_string(),
    })
}

/// Accumulates events and entries across the pages of one entry list.
#[derive(Debug, Default)]
pub struct EntryListParser {
    events: Vec<Event>,
    event_index: HashMap<(Gender, String), usize>,
    next_number: HashMap<Gender, u32>,
    entries: Vec<Entry>,
}

impl EntryListParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses every page in order and returns the sorted document.
    pub fn parse_pages<I, S>(pages: I) -> MasterData
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = Self::new();
        for (index, text) in pages.into_iter().enumerate() {
            parser.parse_page(index + 1, text.as_ref());
        }
        parser.finish()
    }

    /// Feeds one page of extracted text. Pages without an event header are ignored.
    pub fn parse_page(&mut self, page_number: usize, text: &str) {
        let lines = content_lines(text);
        let Some((first, rows)) = lines.split_first() else {
            tracing::debug!("Page {} is empty, skipping", page_number);
            return;
        };

        let Some((gender, event_name)) = recognize_event(first) else {
            tracing::debug!("Page {} has no event header, skipping", page_number);
            return;
        };

        let event_id = self.event_id_for(gender, event_name);
        let before = self.entries.len();
        for row in rows.iter().filter_map(|line| recognize_row(line)) {
            self.entries.push(Entry::new(
                &event_id,
                row.seed_order,
                &row.org_code,
                row.athlete_name,
            ));
        }

        tracing::debug!(
            "Page {}: event {} with {} entries",
            page_number,
            event_id,
            self.entries.len() - before
        );
    }

    /// Looks up the event, registering it on first sight.
    fn event_id_for(&mut self, gender: Gender, event_name: String) -> String {
        let key = (gender, event_name);
        if let Some(&index) = self.event_index.get(&key) {
            return self.events[index].event_id.clone();
        }

        let number = self.next_number.entry(gender).or_insert(0);
        *number += 1;
        let event = Event {
            event_id: format!("{}-{:02}", gender.id_prefix(), number),
            sort_order: self.events.len() as u32 + 1,
            gender,
            event_name: key.1.clone(),
        };
        tracing::debug!("New event {} ({} {})", event.event_id, gender.as_str(), event.event_name);

        let event_id = event.event_id.clone();
        self.event_index.insert(key, self.events.len());
        self.events.push(event);
        event_id
    }

    /// Sorts entries by (event id, seed, entry id) and hands back the document.
    pub fn finish(mut self) -> MasterData {
        self.entries.sort_by(|a, b| {
            (&a.event_id, a.seed_order, &a.entry_id).cmp(&(&b.event_id, b.seed_order, &b.entry_id))
        });
        MasterData {
            events: self.events,
            entries: self.entries,
        }
    }
}
