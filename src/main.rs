/// secaudit - security-audit log viewer
///
/// Copyright (C) 2026 The secaudit Authors
///
/// This program is free software: you can redistribute it and/or modify
/// it under the terms of the GNU General Public License as published by
/// the Free Software Foundation, either version 3 of the License, or
/// (at your option) any later version.
///
/// This program is distributed in the hope that it will be useful,
/// but WITHOUT ANY WARRANTY; without even the implied warranty of
/// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
/// GNU General Public License for more details.
///
/// You should have received a copy of the GNU General Public License
/// along with this program.  If not, see <https://www.gnu.org/licenses/>.
use clap::Parser;
use secaudit::classify::classify;
use secaudit::config::GlobalConfig;
use secaudit::pager::PaginationState;
use secaudit::source;
use secaudit::ui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "secaudit")]
#[command(version)]
#[command(about = "Browse a security-audit log export with classification and paging", long_about = None)]
struct Args {
    /// Path to the JSON log export to open
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Page to display (clamped into range)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Records per page
    #[arg(long = "per-page", default_value_t = 10)]
    per_page: usize,

    /// Only show rows flagged as threats
    #[arg(long)]
    threats_only: bool,
}

fn main() -> anyhow::Result<()> {
    // Set RUST_LOG to override (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("secaudit starting up (version {})", secaudit::version_string());

    let args = Args::parse();
    let config = GlobalConfig::load();
    let policy = config.badge_policy();
    let domains = &config.role_domains;

    let records = source::load_records(&args.file)?;
    let records: Vec<_> = if args.threats_only {
        records
            .into_iter()
            .filter(|record| secaudit::classify::is_threat(&record.action))
            .collect()
    } else {
        records
    };

    let state = PaginationState::new(args.per_page)
        .with_total_items(records.len())
        .go_to(args.page);

    let rows: Vec<_> = source::page_slice(&records, &state)
        .iter()
        .map(|record| (record, classify(record, &policy, domains)))
        .collect();

    if rows.is_empty() {
        println!("No records on page {}.", state.current_page());
    } else {
        print!("{}", ui::render_page(&rows));
    }

    let pager = ui::render_pager(&state);
    if !pager.is_empty() {
        println!("\n{pager}");
    }

    Ok(())
}
