// crates/educonnect-cli/src/main.rs
// ============================================================================
// Module: EduConnect CLI Entry Point
// Description: Command dispatcher for the EduConnect admin core.
// Purpose: Provide a terminal front end over filtering, actions, and config.
// Dependencies: clap, educonnect-config, educonnect-core, serde, serde_jcs, thiserror.
// ============================================================================

//! ## Overview
//! The EduConnect CLI drives the headless admin core from a terminal: list
//! commands filter and paginate the seeded directory, action commands run
//! through the command desk with notifications echoed to stderr, and config
//! commands validate the platform configuration file. Structured output is
//! canonical JSON so results diff cleanly.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use educonnect_config::DEFAULT_CONFIG_NAME;
use educonnect_config::PlatformConfig;
use educonnect_core::ActionReceipt;
use educonnect_core::AdminAction;
use educonnect_core::CommandDesk;
use educonnect_core::FilterState;
use educonnect_core::InMemoryDirectory;
use educonnect_core::NotificationSink;
use educonnect_core::PageCursor;
use educonnect_core::PlatformUser;
use educonnect_core::RecordPage;
use educonnect_core::School;
use educonnect_core::SchoolId;
use educonnect_core::Selection;
use educonnect_core::Severity;
use educonnect_core::SupportTicket;
use educonnect_core::TableRecord;
use educonnect_core::TicketId;
use educonnect_core::UserId;
use educonnect_core::Vendor;
use educonnect_core::VendorId;
use educonnect_core::filter_records;
use educonnect_core::paginate;
use educonnect_core::summarize_directory;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default page size for list commands.
const DEFAULT_PAGE_LIMIT: usize = 50;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "educonnect", version, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// School directory commands.
    Schools {
        /// Selected school subcommand.
        #[command(subcommand)]
        command: SchoolCommand,
    },
    /// Vendor directory commands.
    Vendors {
        /// Selected vendor subcommand.
        #[command(subcommand)]
        command: VendorCommand,
    },
    /// Platform user commands.
    Users {
        /// Selected user subcommand.
        #[command(subcommand)]
        command: UserCommand,
    },
    /// Support ticket commands.
    Tickets {
        /// Selected ticket subcommand.
        #[command(subcommand)]
        command: TicketCommand,
    },
    /// Print the combined dashboard summary.
    Summary(SummaryCommand),
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// School subcommands.
#[derive(Subcommand, Debug)]
enum SchoolCommand {
    /// List schools matching the given filters.
    List(SchoolListCommand),
    /// Approve a pending school registration.
    Approve(SchoolActionCommand),
    /// Reject a pending school registration.
    Reject(SchoolActionCommand),
    /// Suspend an active school.
    Suspend(SchoolActionCommand),
}

/// Arguments for school listing.
#[derive(Args, Debug)]
struct SchoolListCommand {
    /// Free-text search over school names.
    #[arg(long, value_name = "TERM")]
    search: Option<String>,
    /// Status filter (`all` means no constraint).
    #[arg(long, value_name = "STATUS")]
    status: Option<String>,
    /// School kind filter (`all` means no constraint).
    #[arg(long, value_name = "KIND")]
    kind: Option<String>,
    /// Region filter (`all` means no constraint).
    #[arg(long, value_name = "REGION")]
    region: Option<String>,
    /// Shared pagination and output arguments.
    #[command(flatten)]
    page: PageArgs,
}

/// Arguments addressing one school by identifier.
#[derive(Args, Debug)]
struct SchoolActionCommand {
    /// School identifier (1-based).
    #[arg(long, value_name = "ID")]
    id: u64,
}

/// Vendor subcommands.
#[derive(Subcommand, Debug)]
enum VendorCommand {
    /// List vendors matching the given filters.
    List(VendorListCommand),
    /// Approve a pending vendor.
    Approve(VendorActionCommand),
    /// Reject a pending vendor.
    Reject(VendorActionCommand),
}

/// Arguments for vendor listing.
#[derive(Args, Debug)]
struct VendorListCommand {
    /// Free-text search over vendor names and category labels.
    #[arg(long, value_name = "TERM")]
    search: Option<String>,
    /// Status filter (`all` means no constraint).
    #[arg(long, value_name = "STATUS")]
    status: Option<String>,
    /// Category filter (`all` means no constraint).
    #[arg(long, value_name = "CATEGORY")]
    category: Option<String>,
    /// Shared pagination and output arguments.
    #[command(flatten)]
    page: PageArgs,
}

/// Arguments addressing one vendor by identifier.
#[derive(Args, Debug)]
struct VendorActionCommand {
    /// Vendor identifier (1-based).
    #[arg(long, value_name = "ID")]
    id: u64,
}

/// User subcommands.
#[derive(Subcommand, Debug)]
enum UserCommand {
    /// List platform users matching the given filters.
    List(UserListCommand),
    /// Deactivate a user account.
    Deactivate(UserActionCommand),
    /// Send a password reset email to a user.
    ResetPassword(UserActionCommand),
}

/// Arguments for user listing.
#[derive(Args, Debug)]
struct UserListCommand {
    /// Free-text search over user names and email addresses.
    #[arg(long, value_name = "TERM")]
    search: Option<String>,
    /// Status filter (`all` means no constraint).
    #[arg(long, value_name = "STATUS")]
    status: Option<String>,
    /// Role filter (`all` means no constraint).
    #[arg(long, value_name = "ROLE")]
    role: Option<String>,
    /// Shared pagination and output arguments.
    #[command(flatten)]
    page: PageArgs,
}

/// Arguments addressing one user by identifier.
#[derive(Args, Debug)]
struct UserActionCommand {
    /// User identifier (1-based).
    #[arg(long, value_name = "ID")]
    id: u64,
}

/// Ticket subcommands.
#[derive(Subcommand, Debug)]
enum TicketCommand {
    /// List support tickets matching the given filters.
    List(TicketListCommand),
    /// Reply on a support ticket thread.
    Reply(TicketReplyCommand),
    /// Mark a support ticket resolved.
    Resolve(TicketActionCommand),
}

/// Arguments for ticket listing.
#[derive(Args, Debug)]
struct TicketListCommand {
    /// Free-text search over ticket subjects and identifiers.
    #[arg(long, value_name = "TERM")]
    search: Option<String>,
    /// Status filter (`all` means no constraint).
    #[arg(long, value_name = "STATUS")]
    status: Option<String>,
    /// Category filter (`all` means no constraint).
    #[arg(long, value_name = "CATEGORY")]
    category: Option<String>,
    /// Priority filter (`all` means no constraint).
    #[arg(long, value_name = "PRIORITY")]
    priority: Option<String>,
    /// Shared pagination and output arguments.
    #[command(flatten)]
    page: PageArgs,
}

/// Arguments addressing one ticket by identifier.
#[derive(Args, Debug)]
struct TicketActionCommand {
    /// Ticket identifier (for example `TKT-1001`).
    #[arg(long, value_name = "ID")]
    id: String,
}

/// Arguments for a ticket reply.
#[derive(Args, Debug)]
struct TicketReplyCommand {
    /// Ticket identifier (for example `TKT-1001`).
    #[arg(long, value_name = "ID")]
    id: String,
    /// Reply message body.
    #[arg(long, value_name = "TEXT")]
    message: String,
}

/// Arguments for the dashboard summary.
#[derive(Args, Debug)]
struct SummaryCommand {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate the platform configuration file.
    Validate(ConfigValidateCommand),
}

/// Arguments for config validation.
#[derive(Args, Debug)]
struct ConfigValidateCommand {
    /// Optional config file path (defaults to educonnect.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Shared pagination and output arguments for list commands.
#[derive(Args, Debug)]
struct PageArgs {
    /// Row offset to start the page at.
    #[arg(long, value_name = "N", default_value_t = 0)]
    offset: usize,
    /// Maximum rows in the page.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PAGE_LIMIT)]
    limit: usize,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Output formats for list and summary commands.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Line-oriented text output.
    Text,
    /// Canonical JSON output.
    Json,
}

// ============================================================================
// SECTION: Output Payloads
// ============================================================================

/// JSON payload for one page of list results.
#[derive(Debug, Serialize)]
struct ListPayload<'a, R> {
    /// Rows in this page, in source order.
    rows: &'a [&'a R],
    /// Total matching rows before pagination.
    total: usize,
    /// Cursor for the next page, when more rows remain.
    next_cursor: Option<&'a str>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Notifications
// ============================================================================

/// Notification sink writing action outcomes to stderr.
#[derive(Debug, Clone, Copy, Default)]
struct StderrNotifications;

impl NotificationSink for StderrNotifications {
    fn notify(&self, severity: Severity, message: &str) {
        // Delivery is best-effort; a broken stderr must not abort the action.
        let _ = write_stderr_line(&format!("[{}] {message}", severity.as_str()));
    }
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let directory = InMemoryDirectory::seeded();
    match cli.command {
        Commands::Schools {
            command,
        } => command_schools(&directory, command),
        Commands::Vendors {
            command,
        } => command_vendors(&directory, command),
        Commands::Users {
            command,
        } => command_users(&directory, command),
        Commands::Tickets {
            command,
        } => command_tickets(&directory, command),
        Commands::Summary(command) => command_summary(&directory, &command),
        Commands::Config {
            command,
        } => command_config(command),
    }
}

// ============================================================================
// SECTION: School Commands
// ============================================================================

/// Executes a school subcommand.
fn command_schools(directory: &InMemoryDirectory, command: SchoolCommand) -> CliResult<ExitCode> {
    match command {
        SchoolCommand::List(command) => {
            let state = build_filter_state(command.search.as_deref(), &[
                ("status", command.status.as_deref()),
                ("kind", command.kind.as_deref()),
                ("region", command.region.as_deref()),
            ])?;
            let page = list_page(directory.schools(), &state, &command.page)?;
            render_page(&page, command.page.format, render_school_line)
        }
        SchoolCommand::Approve(command) => {
            submit_school(directory, command.id, &AdminAction::Approve)
        }
        SchoolCommand::Reject(command) => {
            submit_school(directory, command.id, &AdminAction::Reject)
        }
        SchoolCommand::Suspend(command) => {
            submit_school(directory, command.id, &AdminAction::Suspend)
        }
    }
}

/// Submits a school action through the command desk.
fn submit_school(
    directory: &InMemoryDirectory,
    raw_id: u64,
    action: &AdminAction,
) -> CliResult<ExitCode> {
    let id = SchoolId::from_raw(raw_id)
        .ok_or_else(|| CliError::new("school id must be >= 1".to_string()))?;
    let desk = CommandDesk::new(directory.clone(), StderrNotifications);
    finish_action(desk.submit::<School>(&id, action).ok())
}

/// Renders one school row as a text line.
fn render_school_line(school: &School) -> String {
    format!(
        "{}  {}  [{} | {} | {}]  admissions={}",
        school.id,
        school.name,
        school.kind.as_str(),
        school.region,
        school.status.as_str(),
        school.admissions
    )
}

// ============================================================================
// SECTION: Vendor Commands
// ============================================================================

/// Executes a vendor subcommand.
fn command_vendors(directory: &InMemoryDirectory, command: VendorCommand) -> CliResult<ExitCode> {
    match command {
        VendorCommand::List(command) => {
            let state = build_filter_state(command.search.as_deref(), &[
                ("status", command.status.as_deref()),
                ("category", command.category.as_deref()),
            ])?;
            let page = list_page(directory.vendors(), &state, &command.page)?;
            render_page(&page, command.page.format, render_vendor_line)
        }
        VendorCommand::Approve(command) => {
            submit_vendor(directory, command.id, &AdminAction::Approve)
        }
        VendorCommand::Reject(command) => {
            submit_vendor(directory, command.id, &AdminAction::Reject)
        }
    }
}

/// Submits a vendor action through the command desk.
fn submit_vendor(
    directory: &InMemoryDirectory,
    raw_id: u64,
    action: &AdminAction,
) -> CliResult<ExitCode> {
    let id = VendorId::from_raw(raw_id)
        .ok_or_else(|| CliError::new("vendor id must be >= 1".to_string()))?;
    let desk = CommandDesk::new(directory.clone(), StderrNotifications);
    finish_action(desk.submit::<Vendor>(&id, action).ok())
}

/// Renders one vendor row as a text line.
fn render_vendor_line(vendor: &Vendor) -> String {
    format!(
        "{}  {}  [{} | {}]  rating={:.1}  orders={}",
        vendor.id,
        vendor.name,
        vendor.category.as_str(),
        vendor.status.as_str(),
        vendor.rating,
        vendor.orders
    )
}

// ============================================================================
// SECTION: User Commands
// ============================================================================

/// Executes a user subcommand.
fn command_users(directory: &InMemoryDirectory, command: UserCommand) -> CliResult<ExitCode> {
    match command {
        UserCommand::List(command) => {
            let state = build_filter_state(command.search.as_deref(), &[
                ("status", command.status.as_deref()),
                ("role", command.role.as_deref()),
            ])?;
            let page = list_page(directory.users(), &state, &command.page)?;
            render_page(&page, command.page.format, render_user_line)
        }
        UserCommand::Deactivate(command) => {
            submit_user(directory, command.id, &AdminAction::Deactivate)
        }
        UserCommand::ResetPassword(command) => {
            submit_user(directory, command.id, &AdminAction::ResetPassword)
        }
    }
}

/// Submits a user action through the command desk.
fn submit_user(
    directory: &InMemoryDirectory,
    raw_id: u64,
    action: &AdminAction,
) -> CliResult<ExitCode> {
    let id = UserId::from_raw(raw_id)
        .ok_or_else(|| CliError::new("user id must be >= 1".to_string()))?;
    let desk = CommandDesk::new(directory.clone(), StderrNotifications);
    finish_action(desk.submit::<PlatformUser>(&id, action).ok())
}

/// Renders one user row as a text line.
fn render_user_line(user: &PlatformUser) -> String {
    format!(
        "{}  {}  <{}>  [{} | {}]  logins={}{}",
        user.id,
        user.name,
        user.email,
        user.role.as_str(),
        user.status.as_str(),
        user.login_count,
        if user.flagged { "  flagged" } else { "" }
    )
}

// ============================================================================
// SECTION: Ticket Commands
// ============================================================================

/// Executes a ticket subcommand.
fn command_tickets(directory: &InMemoryDirectory, command: TicketCommand) -> CliResult<ExitCode> {
    match command {
        TicketCommand::List(command) => {
            let state = build_filter_state(command.search.as_deref(), &[
                ("status", command.status.as_deref()),
                ("category", command.category.as_deref()),
                ("priority", command.priority.as_deref()),
            ])?;
            let page = list_page(directory.tickets(), &state, &command.page)?;
            render_page(&page, command.page.format, render_ticket_line)
        }
        TicketCommand::Reply(command) => {
            let action = AdminAction::Reply {
                message: command.message,
            };
            submit_ticket(directory, &command.id, &action)
        }
        TicketCommand::Resolve(command) => {
            submit_ticket(directory, &command.id, &AdminAction::Resolve)
        }
    }
}

/// Submits a ticket action through the command desk.
fn submit_ticket(
    directory: &InMemoryDirectory,
    raw_id: &str,
    action: &AdminAction,
) -> CliResult<ExitCode> {
    let id = TicketId::new(raw_id);
    let desk = CommandDesk::new(directory.clone(), StderrNotifications);
    finish_action(desk.submit::<SupportTicket>(&id, action).ok())
}

/// Renders one ticket row as a text line.
fn render_ticket_line(ticket: &SupportTicket) -> String {
    format!(
        "{}  {}  [{} | {} | {}]  messages={}",
        ticket.id,
        ticket.subject,
        ticket.category.as_str(),
        ticket.priority.as_str(),
        ticket.status.as_str(),
        ticket.messages
    )
}

// ============================================================================
// SECTION: Summary Command
// ============================================================================

/// Executes the `summary` command.
fn command_summary(
    directory: &InMemoryDirectory,
    command: &SummaryCommand,
) -> CliResult<ExitCode> {
    let summary = summarize_directory(
        directory.schools(),
        directory.vendors(),
        directory.users(),
        directory.tickets(),
    );
    match command.format {
        OutputFormat::Json => write_canonical_json(&summary)?,
        OutputFormat::Text => {
            let schools = summary.schools;
            let vendors = summary.vendors;
            let users = summary.users;
            let tickets = summary.tickets;
            write_stdout_line(&format!(
                "schools: total={} active={} pending={} suspended={} admissions={}",
                schools.total,
                schools.active,
                schools.pending,
                schools.suspended,
                schools.admissions
            ))
            .map_err(stdout_error)?;
            write_stdout_line(&format!(
                "vendors: total={} active={} pending={} inactive={} orders={}",
                vendors.total, vendors.active, vendors.pending, vendors.inactive, vendors.orders
            ))
            .map_err(stdout_error)?;
            write_stdout_line(&format!(
                "users: total={} active={} inactive={} flagged={}",
                users.total, users.active, users.inactive, users.flagged
            ))
            .map_err(stdout_error)?;
            write_stdout_line(&format!(
                "tickets: total={} open={} in_progress={} resolved={} high_priority={}",
                tickets.total,
                tickets.open,
                tickets.in_progress,
                tickets.resolved,
                tickets.high_priority
            ))
            .map_err(stdout_error)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Executes a config subcommand.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(command) => command_config_validate(&command),
    }
}

/// Executes the `config validate` command.
fn command_config_validate(command: &ConfigValidateCommand) -> CliResult<ExitCode> {
    let path = command
        .config
        .as_deref()
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_NAME));
    PlatformConfig::load_from_path(path).map_err(|err| CliError::new(err.to_string()))?;
    write_stdout_line(&format!("config ok: {}", path.display())).map_err(stdout_error)?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Filtering Helpers
// ============================================================================

/// Builds and validates a filter state from CLI arguments.
fn build_filter_state(
    search: Option<&str>,
    selections: &[(&str, Option<&str>)],
) -> CliResult<FilterState> {
    let mut state = FilterState::new();
    if let Some(term) = search {
        state = state.with_search(term);
    }
    for (field, value) in selections {
        if let Some(value) = value {
            state = state.with_selection(*field, Selection::parse(value));
        }
    }
    state.validate().map_err(|err| CliError::new(err.to_string()))?;
    Ok(state)
}

/// Filters and paginates one record domain.
fn list_page<'a, R: TableRecord>(
    records: &'a [R],
    state: &FilterState,
    page: &PageArgs,
) -> CliResult<RecordPage<'a, R>> {
    let rows = filter_records(records, state);
    let cursor = if page.offset == 0 {
        None
    } else {
        Some(
            PageCursor::new(page.offset)
                .encode()
                .map_err(|err| CliError::new(err.to_string()))?,
        )
    };
    paginate(&rows, cursor.as_deref(), page.limit)
        .map_err(|err| CliError::new(err.to_string()))
}

/// Renders a result page in the selected output format.
fn render_page<R: Serialize>(
    page: &RecordPage<'_, R>,
    format: OutputFormat,
    render_line: fn(&R) -> String,
) -> CliResult<ExitCode> {
    match format {
        OutputFormat::Json => {
            let payload = ListPayload {
                rows: &page.rows,
                total: page.total,
                next_cursor: page.next_cursor.as_deref(),
            };
            write_canonical_json(&payload)?;
        }
        OutputFormat::Text => {
            write_stdout_line(&format!("{} results", page.total)).map_err(stdout_error)?;
            for row in &page.rows {
                write_stdout_line(&render_line(row)).map_err(stdout_error)?;
            }
            if let Some(cursor) = &page.next_cursor {
                write_stdout_line(&format!("next: {cursor}")).map_err(stdout_error)?;
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Maps an action outcome onto an exit code.
///
/// Failures were already reported through the stderr notification sink, so
/// they terminate with a failure code instead of a second error line.
fn finish_action(receipt: Option<ActionReceipt>) -> CliResult<ExitCode> {
    match receipt {
        Some(receipt) => {
            write_stdout_line(&receipt.message).map_err(stdout_error)?;
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a value to stdout as canonical JSON.
fn write_canonical_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut bytes = serde_jcs::to_vec(value)
        .map_err(|err| CliError::new(format!("failed to serialize output: {err}")))?;
    bytes.push(b'\n');
    write_stdout_bytes(&bytes).map_err(stdout_error)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Wraps a stdout write failure into a CLI error.
fn stdout_error(error: std::io::Error) -> CliError {
    CliError::new(format!("failed to write to stdout: {error}"))
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
