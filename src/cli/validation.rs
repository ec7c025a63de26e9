use crate::cli::args::CliArgs;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(per_page) = args.per_page {
        if per_page == 0 {
            return Err("invalid per-page, expected positive integer".to_string());
        }
    }
    if let Some(max_pages) = args.max_pages {
        if max_pages == 0 {
            return Err("invalid max-pages, expected positive integer".to_string());
        }
    }
    if let Some(raw) = args.output_format.as_deref() {
        if crate::output::OutputFormat::parse(raw).is_none() {
            return Err(format!("invalid --output-format '{raw}', expected text or json"));
        }
    }
    for raw in [args.from.as_deref(), args.to.as_deref(), args.on.as_deref()]
        .into_iter()
        .flatten()
    {
        if !crate::filter::is_iso_date(raw.trim()) {
            return Err(format!("invalid date '{raw}', expected YYYY-MM-DD"));
        }
    }
    for raw in args.filter.iter() {
        if !raw.contains('=') {
            return Err(format!("invalid --filter '{raw}', expected FIELD=PATTERN"));
        }
    }
    if !args.approve.is_empty() || !args.reject.is_empty() {
        if !args.list.is_approval_queue() {
            return Err(format!(
                "--approve/--reject only apply to pending-approvals and gate-approvals, not {}",
                args.list.label()
            ));
        }
        if let Some(id) = args.approve.iter().find(|id| args.reject.contains(id)) {
            return Err(format!("request {id} is both approved and rejected"));
        }
    }
    Ok(())
}
