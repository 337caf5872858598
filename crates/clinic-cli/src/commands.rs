use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use clinic_core::{
    parse_day, payment_total_cents, reconcile_day, reconcile_window, summarize_day,
    summarize_window, to_matrix,
};
use clinic_ingest::{IngestReport, load_events, load_roster};
use clinic_model::{EventKind, EventRecord, MonthWindow, Patient, PatientKey};
use clinic_report::write_matrix_file;

use crate::cli::{CheckArgs, DayArgs, ExportArgs, MonthArgs};
use crate::types::{CheckResult, DayResult, DayRow, ExportResult, MonthResult, RosterCheck};

pub fn run_day(args: &DayArgs) -> Result<DayResult> {
    let day = parse_day(&args.date);
    if !day.is_valid() {
        bail!("unparseable date: {}", args.date);
    }
    let roster = roster_from(&args.roster)?;
    let events = events_from(&args.attendance, EventKind::Attendance)?;
    let report = IngestReport::for_events(EventKind::Attendance, &events);

    let slots = reconcile_day(&roster, &events, day);
    let summary = summarize_day(&slots, day);
    info!(day = %day, slots = slots.len(), "reconciled day");

    let names: BTreeMap<&PatientKey, &str> = roster
        .iter()
        .map(|patient| (&patient.key, patient.name.as_str()))
        .collect();
    let rows = slots
        .iter()
        .map(|slot| DayRow {
            display_id: slot.patient.display_id(),
            name: names.get(&slot.patient).copied().unwrap_or_default().to_string(),
            status: slot.status,
        })
        .collect();

    Ok(DayResult {
        day,
        rows,
        summary,
        report,
    })
}

pub fn run_month(args: &MonthArgs) -> Result<MonthResult> {
    let window = MonthWindow::new(args.month, args.year)?;
    let roster = roster_from(&args.roster)?;
    let events = events_from(&args.attendance, EventKind::Attendance)?;
    let mut reports = vec![IngestReport::for_events(EventKind::Attendance, &events)];

    let slots = reconcile_window(&roster, &events, &window);
    let mut summary = summarize_window(&slots, &window);
    info!(window = %window, patients = slots.len(), "reconciled window");

    if let Some(path) = &args.payments {
        let payments = events_from(path, EventKind::Payment)?;
        reports.push(IngestReport::for_events(EventKind::Payment, &payments));
        summary.financial_total_cents = Some(payment_total_cents(&payments, &window));
    }

    Ok(MonthResult {
        window,
        summary,
        reports,
    })
}

pub fn run_export(args: &ExportArgs) -> Result<ExportResult> {
    let window = MonthWindow::new(args.month, args.year)?;
    let roster = roster_from(&args.roster)?;
    let events = events_from(&args.attendance, EventKind::Attendance)?;

    let matrix = to_matrix(&roster, &events, &window);
    let output_dir = args.output_dir.clone().unwrap_or_else(|| ".".into());
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let path = write_matrix_file(&matrix, &output_dir)
        .with_context(|| format!("failed to write matrix into {}", output_dir.display()))?;
    info!(path = %path.display(), rows = matrix.rows.len(), "exported matrix");

    Ok(ExportResult {
        path,
        rows: matrix.rows.len(),
        days: matrix.days.len(),
    })
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let roster = match &args.roster {
        Some(path) => {
            let roster = roster_from(path)?;
            Some(RosterCheck {
                total: roster.len(),
                active: roster.iter().filter(|patient| patient.is_active()).count(),
                unresolved: roster
                    .iter()
                    .filter(|patient| !patient.key.is_resolved())
                    .count(),
            })
        }
        None => None,
    };

    let sources = [
        (EventKind::Attendance, &args.attendance),
        (EventKind::Call, &args.calls),
        (EventKind::History, &args.history),
        (EventKind::Payment, &args.payments),
    ];
    let mut reports = Vec::new();
    for (kind, path) in sources {
        if let Some(path) = path {
            let events = events_from(path, kind)?;
            reports.push(IngestReport::for_events(kind, &events));
        }
    }
    if roster.is_none() && reports.is_empty() {
        bail!("nothing to check: pass at least one source file");
    }

    Ok(CheckResult { roster, reports })
}

fn roster_from(path: &Path) -> Result<Vec<Patient>> {
    load_roster(path).with_context(|| format!("failed to load roster from {}", path.display()))
}

fn events_from(path: &Path, kind: EventKind) -> Result<Vec<EventRecord>> {
    load_events(path, kind)
        .with_context(|| format!("failed to load {} events from {}", kind, path.display()))
}
