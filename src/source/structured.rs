use super::{max_heading_width, max_width, CellSource, TextMeasure};
use crate::types::{LogicalExtent, ViewValue};

const VALUE_HEADING: &str = "Value";

/// Shows a structured value as one row per entry with a single "Value" column.
///
/// Row labels are list indices, map keys or record field names; sets and
/// tuples have no labels. Value texts are formatted once up front.
#[derive(Debug, Clone)]
pub struct StructSource {
    entries: Vec<(String, ViewValue)>,
    texts: Vec<String>,
    corner: &'static str,
    title: String,
}

impl StructSource {
    pub fn new(value: ViewValue) -> Self {
        let title = match &value {
            ViewValue::List(_)
            | ViewValue::Tuple(_)
            | ViewValue::Set(_)
            | ViewValue::Map(_)
            | ViewValue::Record(_) => value.summary(),
            other => other.kind_name().to_string(),
        };

        let (entries, corner): (Vec<(String, ViewValue)>, &'static str) = match value {
            ViewValue::List(items) => (
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect(),
                "",
            ),
            ViewValue::Tuple(items) | ViewValue::Set(items) => (
                items.into_iter().map(|v| (String::new(), v)).collect(),
                "",
            ),
            ViewValue::Map(entries) => (
                entries.into_iter().map(|(k, v)| (k.label(), v)).collect(),
                "Key",
            ),
            ViewValue::Record(record) => (record.fields, "Name"),
            scalar => (vec![(String::new(), scalar)], ""),
        };
        let texts = entries.iter().map(|(_, v)| v.summary()).collect();

        Self {
            entries,
            texts,
            corner,
            title,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn entry(&self, column: u32, row: u32) -> Option<&ViewValue> {
        if column != 0 {
            return None;
        }
        self.entries.get(row as usize).map(|(_, v)| v)
    }
}

impl CellSource for StructSource {
    fn extent(&self) -> LogicalExtent {
        LogicalExtent::new(1, u32::try_from(self.entries.len()).unwrap_or(u32::MAX))
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn corner_label(&self) -> &str {
        self.corner
    }

    fn row_heading_label(&self, row: u32) -> String {
        self.entries
            .get(row as usize)
            .map(|(label, _)| label.clone())
            .unwrap_or_default()
    }

    fn column_heading_label(&self, _column: u32) -> String {
        VALUE_HEADING.to_string()
    }

    fn cell_text(&self, column: u32, row: u32) -> String {
        if column != 0 {
            return String::new();
        }
        self.texts.get(row as usize).cloned().unwrap_or_default()
    }

    fn cell_is_actionable(&self, column: u32, row: u32) -> bool {
        self.entry(column, row).is_some_and(ViewValue::is_actionable)
    }

    fn cell_value(&self, column: u32, row: u32) -> Option<ViewValue> {
        self.entry(column, row)
            .filter(|v| v.is_actionable())
            .cloned()
    }

    fn max_cell_text_width(&self, measure: &dyn TextMeasure) -> u32 {
        max_width(measure, self.texts.iter().map(String::as_str))
            .max(measure.heading_text_width(VALUE_HEADING))
    }

    fn max_row_heading_width(&self, measure: &dyn TextMeasure) -> u32 {
        max_heading_width(
            measure,
            self.entries
                .iter()
                .map(|(label, _)| label.as_str())
                .chain(std::iter::once(self.corner)),
        )
    }
}
