//! Plain-text event cards.

use event_core::{EventRecord, Render};

/// Renders a record as a short multi-line card.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCardRenderer;

impl Render for TextCardRenderer {
    type Handle = String;

    fn render(&self, record: &EventRecord) -> String {
        let when = record.when();
        let mut lines = vec![
            format!(
                "{} {} {} | {}",
                when.weekday, when.month, when.day_of_month, when.time
            ),
            record.title().to_string(),
            format!("  {}", record.address()),
            format!("  {}", record.tags_display()),
        ];

        let place: Vec<String> = [record.sub_region(), record.region()]
            .into_iter()
            .flatten()
            .map(str::to_uppercase)
            .collect();
        if !place.is_empty() {
            lines.push(format!("  {}", place.join(", ")));
        }

        lines.push(format!("  {}", record.link()));
        lines.join("\n")
    }
}
