use clap::{ArgAction, Parser, ValueEnum};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Visitors,
    Appointments,
    Blacklist,
    Departments,
    Users,
    Units,
    CheckedIn,
    PendingApprovals,
    GateApprovals,
}

impl ListKind {
    pub fn label(self) -> &'static str {
        match self {
            ListKind::Visitors => "visitors",
            ListKind::Appointments => "appointments",
            ListKind::Blacklist => "blacklist",
            ListKind::Departments => "departments",
            ListKind::Users => "users",
            ListKind::Units => "units",
            ListKind::CheckedIn => "checked-in",
            ListKind::PendingApprovals => "pending-approvals",
            ListKind::GateApprovals => "gate-approvals",
        }
    }

    pub fn is_approval_queue(self) -> bool {
        matches!(self, ListKind::PendingApprovals | ListKind::GateApprovals)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "visitor-lists",
    version,
    about = "filter and paginate visitor-management lists",
    long_about = "visitor-lists loads one of the visitor-management lists from the mock backend, applies per-field filters and prints a single page with its page picker.\n\nExamples:\n  visitor-lists -l appointments -f status=pending\n  visitor-lists -l blacklist -f status=All -p 3 --width 480\n  visitor-lists -l appointments --from 2023-11-01 --to 2023-11-30 -o json\n  visitor-lists -l checked-in --on 2023-11-15 -f from=city\n  visitor-lists -l pending-approvals --approve 3 --reject 4\n\nTip: Use --config to persist page size and picker settings."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "vb",
        visible_alias = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        long = "nc",
        visible_alias = "no-color",
        help_heading = "Output",
        help = "Disable colored status lines."
    )]
    pub no_color: bool,

    #[arg(
        short = 'o',
        long = "of",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format: text or json."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 'l',
        long = "ls",
        visible_alias = "list",
        value_enum,
        value_name = "LIST",
        help_heading = "Input",
        help = "List to load."
    )]
    pub list: ListKind,

    #[arg(
        short = 'n',
        long = "cnt",
        visible_alias = "count",
        value_name = "N",
        help_heading = "Input",
        help = "Number of mock records to load (defaults per list)."
    )]
    pub count: Option<usize>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.visitor-lists/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        short = 'f',
        long = "flt",
        visible_alias = "filter",
        value_name = "FIELD=PATTERN",
        action = ArgAction::Append,
        help_heading = "Filters",
        help = "Case-insensitive substring filter on one field (repeatable, all must match)."
    )]
    pub filter: Vec<String>,

    #[arg(
        long = "from",
        value_name = "YYYY-MM-DD",
        help_heading = "Filters",
        help = "Earliest record date to include."
    )]
    pub from: Option<String>,

    #[arg(
        long = "to",
        value_name = "YYYY-MM-DD",
        help_heading = "Filters",
        help = "Latest record date to include."
    )]
    pub to: Option<String>,

    #[arg(
        long = "on",
        value_name = "YYYY-MM-DD",
        conflicts_with_all = ["from", "to"],
        help_heading = "Filters",
        help = "Only records dated on this day."
    )]
    pub on: Option<String>,

    #[arg(
        long = "approve",
        value_name = "ID",
        action = ArgAction::Append,
        help_heading = "Approvals",
        help = "Approve a pending request before listing (repeatable, approval lists only)."
    )]
    pub approve: Vec<u64>,

    #[arg(
        long = "reject",
        value_name = "ID",
        action = ArgAction::Append,
        help_heading = "Approvals",
        help = "Reject a pending request before listing (repeatable, approval lists only)."
    )]
    pub reject: Vec<u64>,

    #[arg(
        short = 'p',
        long = "pg",
        visible_alias = "page",
        value_name = "N",
        help_heading = "Pagination",
        help = "Page to show (out-of-range pages are ignored)."
    )]
    pub page: Option<usize>,

    #[arg(
        short = 'P',
        long = "ipp",
        visible_alias = "per-page",
        value_name = "N",
        help_heading = "Pagination",
        help = "Rows per page."
    )]
    pub per_page: Option<usize>,

    #[arg(
        short = 'm',
        long = "mp",
        visible_alias = "max-pages",
        value_name = "N",
        help_heading = "Pagination",
        help = "Page picker slots (overrides the width-based choice)."
    )]
    pub max_pages: Option<usize>,

    #[arg(
        short = 'w',
        long = "vw",
        visible_alias = "width",
        value_name = "PX",
        help_heading = "Pagination",
        help = "Viewport width used to pick the number of page picker slots."
    )]
    pub width: Option<u32>,
}
