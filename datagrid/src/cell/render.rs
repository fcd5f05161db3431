//! Cell value to fragment dispatch.

use super::value::CellValue;
use crate::fragment::Fragment;
use crate::theme::GridTheme;

const DATE_PATTERN: &str = "%d.%m.%Y";
const DATE_TIME_PATTERN: &str = "%d.%m.%Y %H:%M";

/// Render a cell value into its display fragment.
///
/// The dispatch is total: every variant maps to a fragment and the
/// function never panics. Absent data comes back as [`Fragment::Empty`],
/// the em-dash affordance.
pub fn render(value: &CellValue, theme: &GridTheme) -> Fragment {
    match value {
        CellValue::Null => Fragment::Empty,
        CellValue::Text(text) if text.is_empty() => Fragment::Empty,
        CellValue::Text(text) => Fragment::text(text),
        CellValue::Number(number) => Fragment::text(number.to_string()),
        CellValue::Photo(Some(url)) if !url.is_empty() => Fragment::Photo { url: url.clone() },
        CellValue::Photo(_) => Fragment::Photo {
            url: theme.photo_placeholder.clone(),
        },
        CellValue::Dot(filled) => Fragment::Dot { filled: *filled },
        CellValue::Link { label, href } => Fragment::anchor(label, href),
        CellValue::LinkWithText {
            label,
            href,
            description,
        } => Fragment::Anchor {
            label: label.clone(),
            href: href.clone(),
            description: Some(description.clone()),
        },
        CellValue::Double { primary, secondary } => Fragment::Stacked {
            primary: Box::new(Fragment::text(primary)),
            secondary: Box::new(Fragment::muted(secondary)),
        },
        CellValue::Status(status) => Fragment::Badge {
            status: status.clone(),
        },
        CellValue::Price(price) => {
            Fragment::text(price.format(theme.thousands_separator, &theme.currency))
        }
        CellValue::Date(at) => Fragment::text(at.format(DATE_PATTERN).to_string()),
        CellValue::DateTime(at) => Fragment::text(at.format(DATE_TIME_PATTERN).to_string()),
        CellValue::DateRange(from, to) => Fragment::text(format!(
            "from {} to {}",
            from.format(DATE_PATTERN),
            to.format(DATE_PATTERN)
        )),
        CellValue::Array(items) => {
            let lines: Vec<Fragment> = items
                .iter()
                .filter(|item| !item.is_empty())
                .map(Fragment::text)
                .collect();
            if lines.is_empty() {
                Fragment::Empty
            } else {
                Fragment::Lines(lines)
            }
        }
        CellValue::ArrayLinks(entries) => {
            let lines: Vec<Fragment> = entries
                .iter()
                .filter(|(label, _)| !label.is_empty())
                .map(|(label, href)| Fragment::anchor(label, href))
                .collect();
            if lines.is_empty() {
                Fragment::Empty
            } else {
                Fragment::Lines(lines)
            }
        }
        CellValue::Custom(fragment) => fragment.clone(),
        CellValue::Json(serde_json::Value::Null) => Fragment::Empty,
        CellValue::Json(serde_json::Value::String(text)) if text.is_empty() => Fragment::Empty,
        CellValue::Json(serde_json::Value::String(text)) => Fragment::text(text),
        CellValue::Json(other) => Fragment::text(other.to_string()),
    }
}
