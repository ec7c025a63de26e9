use std::io::Write;
use std::time::Duration;

use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;

use crate::cli::args::{CliArgs, ListKind};
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::controller::ListController;
use crate::filter::{DateRange, FilterCriteria};
use crate::mock::{MockBackend, MockRecord};
use crate::output::{self, OutputFormat};
use crate::records::{
    Appointment, Approvable, BlacklistEntry, CheckedInVisitor, Decision, Department,
    GateRegistration, PendingAppointment, Record, UnitMember, UserAccount, Visitor,
};
use crate::store::RecordStore;

pub fn status_line(tag: &str, message: &str) {
    let tag = match tag {
        "WRN" => tag.bold().yellow(),
        "ERR" => tag.bold().red(),
        _ => tag.bold().green(),
    };
    eprintln!(
        "{}{}{} {}",
        "[".bold().white(),
        tag,
        "]".bold().white(),
        message.white()
    );
}

fn format_kv_line(label: &str, value: &str) {
    eprintln!(":: {:<10}: {}", label, value);
}

fn format_opt_value<'a>(v: Option<&'a str>, default: &'a str) -> &'a str {
    match v {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}

#[derive(Clone, Debug)]
struct RunConfig {
    list: ListKind,
    count: Option<usize>,
    filters: Vec<String>,
    from: Option<String>,
    to: Option<String>,
    page: Option<usize>,
    approve: Vec<u64>,
    reject: Vec<u64>,
    items_per_page: usize,
    max_pages: usize,
    output_format: OutputFormat,
    fetch_delay: Duration,
    no_color: bool,
    verbose: u8,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let pager = cfg.pager().map_err(|e| format!("invalid config: {e}"))?;
    let items_per_page = match args.per_page {
        Some(n) => n,
        None => cfg
            .items_per_page()
            .map_err(|e| format!("invalid config: {e}"))?,
    };
    let max_pages = args
        .max_pages
        .unwrap_or_else(|| pager.max_pages_for(args.width));

    let format_raw = args
        .output_format
        .clone()
        .or_else(|| cfg.output_format.clone())
        .unwrap_or_else(|| "text".to_string());
    let output_format = OutputFormat::parse(&format_raw)
        .ok_or_else(|| format!("invalid output format '{format_raw}', expected text or json"))?;

    let fetch_delay = cfg
        .fetch_delay_ms
        .map(Duration::from_millis)
        .unwrap_or(crate::mock::DEFAULT_FETCH_DELAY);

    Ok(RunConfig {
        list: args.list,
        count: args.count,
        filters: args.filter,
        from: args.on.clone().or(args.from),
        to: args.on.or(args.to),
        page: args.page,
        approve: args.approve,
        reject: args.reject,
        items_per_page,
        max_pages,
        output_format,
        fetch_delay,
        no_color: args.no_color || cfg.no_color.unwrap_or(false),
        verbose: args.verbose,
    })
}

fn loading_spinner(list: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("loading {list}..."));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

async fn load_list<R: MockRecord>(run: &RunConfig) -> Result<ListController<R>, String> {
    let backend = MockBackend::new(run.fetch_delay);
    let spinner = loading_spinner(R::LIST);
    let records = backend.fetch::<R>(run.count).await;
    spinner.finish_and_clear();

    if run.verbose > 0 {
        status_line("INF", &format!("loaded {} {}", records.len(), R::LIST));
    }

    ListController::new(RecordStore::new(records), run.items_per_page).map_err(|e| e.to_string())
}

fn apply_decisions<R: Approvable>(
    controller: &mut ListController<R>,
    run: &RunConfig,
) -> Result<(), String> {
    let decisions = run
        .approve
        .iter()
        .map(|id| (*id, Decision::Approve))
        .chain(run.reject.iter().map(|id| (*id, Decision::Reject)));
    for (id, decision) in decisions {
        controller.decide(id, decision).map_err(|e| e.to_string())?;
        status_line(
            "INF",
            &format!("{} request {id} {}", R::LIST, decision.status().to_lowercase()),
        );
    }
    Ok(())
}

/// Filters and pages a loaded list, returning the rendered output.
fn present<R: Record + Serialize>(
    controller: &mut ListController<R>,
    run: &RunConfig,
) -> Result<Vec<u8>, String> {
    let criteria =
        FilterCriteria::parse_pairs::<R, _>(&run.filters).map_err(|e| e.to_string())?;
    controller.set_filter(criteria);

    let range = DateRange::new(run.from.as_deref(), run.to.as_deref()).map_err(|e| e.to_string())?;
    if !range.is_unbounded() {
        controller.set_date_range(range);
    }

    if let Some(page) = run.page {
        if !controller.goto_page(page) && run.verbose > 0 {
            status_line(
                "WRN",
                &format!(
                    "page {page} is out of range (1-{}), showing page {}",
                    controller.total_pages(),
                    controller.current_page()
                ),
            );
        }
    }

    if run.verbose > 1 {
        status_line(
            "INF",
            &format!(
                "{} of {} records match",
                controller.filtered_count(),
                controller.store().len()
            ),
        );
    }

    let view = output::build_view(controller, run.max_pages);
    output::render(&view, run.output_format)
}

async fn render_list<R>(run: &RunConfig) -> Result<Vec<u8>, String>
where
    R: MockRecord + Serialize,
{
    let mut controller = load_list::<R>(run).await?;
    present(&mut controller, run)
}

async fn render_queue<R>(run: &RunConfig) -> Result<Vec<u8>, String>
where
    R: MockRecord + Approvable + Serialize,
{
    let mut controller = load_list::<R>(run).await?;
    apply_decisions(&mut controller, run)?;
    present(&mut controller, run)
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }

    if run.verbose > 0 {
        format_kv_line("List", run.list.label());
        format_kv_line("Per page", &run.items_per_page.to_string());
        format_kv_line("Max pages", &run.max_pages.to_string());
        format_kv_line(
            "Filters",
            &if run.filters.is_empty() {
                "none".to_string()
            } else {
                run.filters.join(" ")
            },
        );
        format_kv_line("From", format_opt_value(run.from.as_deref(), "any"));
        format_kv_line("To", format_opt_value(run.to.as_deref(), "any"));
        eprintln!();
    }

    let rendered = match run.list {
        ListKind::Visitors => render_list::<Visitor>(&run).await?,
        ListKind::Appointments => render_list::<Appointment>(&run).await?,
        ListKind::Blacklist => render_list::<BlacklistEntry>(&run).await?,
        ListKind::Departments => render_list::<Department>(&run).await?,
        ListKind::Users => render_list::<UserAccount>(&run).await?,
        ListKind::Units => render_list::<UnitMember>(&run).await?,
        ListKind::CheckedIn => render_list::<CheckedInVisitor>(&run).await?,
        ListKind::PendingApprovals => render_queue::<PendingAppointment>(&run).await?,
        ListKind::GateApprovals => render_queue::<GateRegistration>(&run).await?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&rendered)
        .and_then(|_| stdout.flush())
        .map_err(|e| format!("failed to write output: {e}"))?;
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                print!("{e}");
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    let cfg = match args.config.as_deref() {
        Some(path) => config::load_config(&config::expand_tilde(path), false)?,
        None => match config::default_config_path() {
            Some(path) => {
                if let Err(e) = config::ensure_default_config_file(&path) {
                    status_line("WRN", &e);
                }
                config::load_config(&path, true)?
            }
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))
}
