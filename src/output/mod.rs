use itertools::Itertools;
use serde::Serialize;

use crate::controller::ListController;
use crate::pagination::{PageState, PageToken};
use crate::records::{FilterField, Record};

const MAX_CELL_WIDTH: usize = 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" | "table" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ActiveFilter {
    pub field: &'static str,
    pub pattern: String,
}

/// Everything the presentation layer needs to draw one page of a list.
#[derive(Clone, Debug, Serialize)]
pub struct PageView<'a, R> {
    pub list: &'static str,
    pub page_state: PageState,
    pub total_pages: usize,
    pub pages: Vec<PageToken>,
    pub filters: Vec<ActiveFilter>,
    pub records: Vec<&'a R>,
}

pub fn build_view<R: Record>(controller: &ListController<R>, max_pages: usize) -> PageView<'_, R> {
    let filters = controller
        .criteria()
        .active()
        .map(|(field, pattern)| ActiveFilter {
            field: field.key(),
            pattern: pattern.to_string(),
        })
        .collect();
    PageView {
        list: R::LIST,
        page_state: controller.page_state(),
        total_pages: controller.total_pages(),
        pages: controller.pages(max_pages),
        filters,
        records: controller.derived_page(),
    }
}

/// `< 1 ... 8 9 [10] 11 12 ... 20 >`, arrows only where a move is possible.
pub fn render_pager(pages: &[PageToken], state: &PageState) -> String {
    if pages.is_empty() {
        return String::new();
    }
    let mut parts: Vec<String> = Vec::with_capacity(pages.len() + 2);
    if state.has_previous() {
        parts.push("<".to_string());
    }
    for token in pages {
        match token {
            PageToken::Page(n) if *n == state.current_page => parts.push(format!("[{n}]")),
            other => parts.push(other.to_string()),
        }
    }
    if state.has_next() {
        parts.push(">".to_string());
    }
    parts.join(" ")
}

pub fn render_summary(state: &PageState) -> String {
    let (start, end) = state.bounds();
    if start == end {
        return "no matching records".to_string();
    }
    format!("showing {}-{} of {}", start + 1, end, state.total_items)
}

fn fit_cell(value: &str) -> String {
    if value.chars().count() <= MAX_CELL_WIDTH {
        return value.to_string();
    }
    let mut out: String = value.chars().take(MAX_CELL_WIDTH - 3).collect();
    out.push_str("...");
    out
}

pub fn render_table<R: Record>(records: &[&R]) -> String {
    let fields = R::Field::ALL;
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| fields.iter().map(|f| fit_cell(&r.value(*f).display())).collect())
        .collect();

    let widths: Vec<usize> = fields
        .iter()
        .enumerate()
        .map(|(i, f)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(f.label().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &mut dyn Iterator<Item = String>| {
        cells
            .zip(widths.iter())
            .map(|(c, w)| format!("{c:<width$}", width = *w))
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&format_row(&mut fields.iter().map(|f| f.label().to_string())));
    out.push('\n');
    out.push_str(&widths.iter().map(|w| "-".repeat(*w)).join("-+-"));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(&mut row.into_iter()));
        out.push('\n');
    }
    out
}

pub fn render_text<R: Record>(view: &PageView<'_, R>) -> Vec<u8> {
    let mut out = String::new();
    if !view.filters.is_empty() {
        let summary = view
            .filters
            .iter()
            .map(|f| format!("{}={}", f.field, f.pattern))
            .join(" ");
        out.push_str(&format!("filters: {summary}\n\n"));
    }
    if !view.records.is_empty() {
        out.push_str(&render_table(&view.records));
        out.push('\n');
    }
    out.push_str(&render_summary(&view.page_state));
    out.push('\n');
    let pager = render_pager(&view.pages, &view.page_state);
    if !pager.is_empty() {
        out.push_str(&pager);
        out.push('\n');
    }
    out.into_bytes()
}

pub fn render_json<R: Serialize>(view: &PageView<'_, R>) -> Result<Vec<u8>, String> {
    let mut out = serde_json::to_vec_pretty(view)
        .map_err(|e| format!("failed to serialize {} page: {e}", view.list))?;
    out.push(b'\n');
    Ok(out)
}

pub fn render<R: Record + Serialize>(
    view: &PageView<'_, R>,
    format: OutputFormat,
) -> Result<Vec<u8>, String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => render_json(view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRecord;
    use crate::records::{Department, DepartmentField};
    use crate::store::RecordStore;

    fn departments(per_page: usize) -> ListController<Department> {
        ListController::new(RecordStore::new(Department::mock_many(25)), per_page).unwrap()
    }

    #[test]
    fn output_format_parse() {
        assert_eq!(OutputFormat::parse(" JSON "), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("txt"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("xml"), None);
    }

    #[test]
    fn pager_marks_current_page() {
        let state = PageState {
            current_page: 10,
            items_per_page: 10,
            total_items: 200,
        };
        let pages = crate::pagination::pagination_pages(10, 20, 5);
        assert_eq!(render_pager(&pages, &state), "< 1 ... 8 9 [10] 11 12 ... 20 >");
    }

    #[test]
    fn pager_hides_arrows_at_edges() {
        let state = PageState {
            current_page: 1,
            items_per_page: 10,
            total_items: 10,
        };
        assert_eq!(render_pager(&[PageToken::Page(1)], &state), "[1]");
    }

    #[test]
    fn summary_counts_are_one_based() {
        let mut c = departments(10);
        assert!(c.goto_page(3));
        assert_eq!(render_summary(&c.page_state()), "showing 21-25 of 25");

        c.set_field(DepartmentField::DepartmentName, "no such department");
        assert_eq!(render_summary(&c.page_state()), "no matching records");
    }

    #[test]
    fn text_output_lists_page_rows() {
        let mut c = departments(5);
        c.set_field(DepartmentField::DepartmentName, "finance");
        let view = build_view(&c, 5);
        let text = String::from_utf8(render_text(&view)).unwrap();
        assert!(text.starts_with("filters: department_name=finance\n"));
        assert!(text.contains("Department Name"));
        assert_eq!(text.matches("| Finance").count(), 2);
        assert!(text.contains("showing 1-2 of 2"));
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(40);
        let cell = fit_cell(&long);
        assert_eq!(cell.chars().count(), MAX_CELL_WIDTH);
        assert!(cell.ends_with("..."));
    }

    #[test]
    fn json_output_carries_tokens_and_records() {
        let mut c = departments(5);
        assert!(c.goto_page(3));
        let view = build_view(&c, 3);
        let value: serde_json::Value = serde_json::from_slice(&render_json(&view).unwrap()).unwrap();
        assert_eq!(value["list"], "departments");
        assert_eq!(value["page_state"]["current_page"], 3);
        assert_eq!(value["total_pages"], 5);
        assert_eq!(value["pages"], serde_json::json!([1, 2, 3, 4, 5]));
        assert_eq!(value["records"].as_array().map(|r| r.len()), Some(5));
        assert_eq!(value["records"][0]["id"], 11);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("row cannot be encoded"))
        }
    }

    #[test]
    fn json_serialization_failure_is_reported() {
        let row = Unserializable;
        let view = PageView {
            list: "departments",
            page_state: PageState {
                current_page: 1,
                items_per_page: 10,
                total_items: 1,
            },
            total_pages: 1,
            pages: vec![PageToken::Page(1)],
            filters: Vec::new(),
            records: vec![&row],
        };
        let err = render_json(&view).unwrap_err();
        assert!(err.starts_with("failed to serialize departments page"));
        assert!(err.contains("row cannot be encoded"));
    }
}
