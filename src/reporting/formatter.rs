use crate::models::{AggregationEntry, ReportData};

/// Format a gigabyte total the way the dashboard has always shown it: whole
/// numbers keep one decimal ("2.0"), everything else uses the shortest form.
pub fn format_gb(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn format_table(title: &str, key_header: &str, entries: &[AggregationEntry]) -> String {
    let width = entries
        .iter()
        .map(|e| e.key.chars().count())
        .chain(std::iter::once(key_header.len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n", title);
    out.push_str(&format!("{:<width$}  {:>12}\n", key_header, "Total GB", width = width));
    out.push_str(&format!("{}  {}\n", "-".repeat(width), "-".repeat(12)));
    for entry in entries {
        out.push_str(&format!(
            "{:<width$}  {:>12}\n",
            entry.key,
            format_gb(entry.total_gb),
            width = width
        ));
    }
    out
}

/// Plain-text rendering of a report for terminal output.
pub fn format_report_text(report: &ReportData) -> String {
    let mut out = format_table(
        "Virtual Machines - Summary by Company",
        "Company",
        &report.vm_summary,
    );
    out.push('\n');
    out.push_str(&format_table(
        "Workstations - Summary by Tenant/Prefix",
        "Tenant / Prefix",
        &report.workstation_summary,
    ));
    out.push_str(&format!(
        "\nVMs: {} | Workstation Jobs Found: {}\n",
        report.vm_count, report.workstation_job_count
    ));
    out.push_str(&format!(
        "Totals: VMs {} GB | Workstations {} GB\n",
        format_gb(crate::aggregate::round2(report.vm_total_gb())),
        format_gb(crate::aggregate::round2(report.workstation_total_gb())),
    ));
    out
}
