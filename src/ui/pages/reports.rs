use dioxus::prelude::*;

use crate::app::{load_reports, ActionError, Backend};
use crate::domain::{
    format_timestamp, generate_figures, report_csv, report_file_name, reports::ReportFigures,
    AppState, AuditReport, NewAuditReport, ReportForm, ReportType,
};
use crate::ui::{
    components::{
        badge::Badge,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    theme::{self, report_type_tone},
};
use crate::util::export::write_export;

async fn create_report(
    backend: Backend,
    form: ReportForm,
    figures: ReportFigures,
) -> Result<AuditReport, ActionError> {
    let client = backend.client()?;
    let user_id = client.require_user().await?;
    let payload = NewAuditReport::from_form(user_id, &form, figures)?;
    Ok(client.insert_report(&payload).await?)
}

fn download_report(report: &AuditReport) -> Result<std::path::PathBuf, ActionError> {
    Ok(write_export(&report_file_name(&report.report_name), &report_csv(report))?)
}

#[component]
pub fn ReportsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let backend = use_context::<Backend>();
    let mut form = use_signal(ReportForm::default);
    let mut generating = use_signal(|| false);

    let _load = use_future({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move { load_reports(state, toasts, backend, false).await }
        }
    });

    let current = form();
    let reports = state.with(|s| s.reports.clone());

    let on_generate = move |_: MouseEvent| {
        if generating() {
            return;
        }
        let backend = backend.clone();
        let snapshot = form.peek().clone();
        let figures = generate_figures(&mut rand::thread_rng());
        generating.set(true);
        spawn(async move {
            match create_report(backend, snapshot, figures).await {
                Ok(report) => {
                    tracing::info!(report = %report.id, shipments = report.total_shipments, "audit report generated");
                    state.with_mut(|s| s.prepend_report(report));
                    form.set(ReportForm::default());
                    push_toast(toasts, ToastKind::Success, "Audit report generated.");
                }
                Err(error) => push_toast(toasts, ToastKind::Error, format!("Could not generate report: {error}")),
            }
            generating.set(false);
        });
    };

    let on_download = move |report: AuditReport| match download_report(&report) {
        Ok(path) => push_toast(toasts, ToastKind::Success, format!("Saved {}", path.display())),
        Err(error) => push_toast(toasts, ToastKind::Error, format!("Download failed: {error}")),
    };

    rsx! {
        div { class: "space-y-8",
            div {
                h2 { class: "{theme::PAGE_TITLE}", "Audit Reports" }
                p { class: "mt-1 text-sm {theme::TEXT_MUTED}",
                    "Generate emission audit reports for compliance and download them as CSV."
                }
            }

            div { class: "grid gap-6 lg:grid-cols-3",
                section { class: "{theme::PANEL} p-5 space-y-4",
                    h3 { class: "{theme::SECTION_TITLE}", "New Report" }
                    label {
                        span { class: "{theme::LABEL}", "Report Name" }
                        input {
                            class: "{theme::INPUT}",
                            value: "{current.report_name}",
                            oninput: move |evt| form.with_mut(|f| f.report_name = evt.value()),
                        }
                    }
                    label {
                        span { class: "{theme::LABEL}", "Report Type" }
                        select {
                            class: "{theme::INPUT}",
                            value: "{current.report_type}",
                            onchange: move |evt| form.with_mut(|f| f.report_type = evt.value()),
                            option { value: "", "Select type" }
                            for kind in ReportType::ALL {
                                option { key: "{kind.as_str()}", value: kind.as_str(), "{kind.label()}" }
                            }
                        }
                    }
                    div { class: "grid grid-cols-2 gap-3",
                        label {
                            span { class: "{theme::LABEL}", "Period Start" }
                            input {
                                class: "{theme::INPUT}",
                                r#type: "date",
                                value: "{current.period_start}",
                                oninput: move |evt| form.with_mut(|f| f.period_start = evt.value()),
                            }
                        }
                        label {
                            span { class: "{theme::LABEL}", "Period End" }
                            input {
                                class: "{theme::INPUT}",
                                r#type: "date",
                                value: "{current.period_end}",
                                oninput: move |evt| form.with_mut(|f| f.period_end = evt.value()),
                            }
                        }
                    }
                    button {
                        class: "{theme::BTN_PRIMARY} w-full",
                        disabled: generating(),
                        onclick: on_generate,
                        if generating() { "Generating…" } else { "Generate Report" }
                    }
                }

                section { class: "{theme::PANEL} p-5 space-y-3 lg:col-span-2",
                    h3 { class: "{theme::SECTION_TITLE}", "Generated Reports" }
                    if reports.is_empty() {
                        p { class: "text-sm {theme::TEXT_MUTED}", "No reports generated yet." }
                    }
                    for report in reports {
                        ReportRow { key: "{report.id}", report, on_download }
                    }
                }
            }
        }
    }
}

#[component]
fn ReportRow(report: AuditReport, on_download: EventHandler<AuditReport>) -> Element {
    let kind = ReportType::parse(&report.report_type)
        .map(|kind| kind.label().to_string())
        .unwrap_or_else(|| report.report_type.clone());
    let emissions = format!("{:.2} t CO₂", report.total_emissions);
    let average = format!("{:.2} kg / shipment", report.average_emissions_kg());
    let generated = format_timestamp(report.generated_at);
    let period = report.period_label();
    let tone = report_type_tone(&report.report_type);
    let target = report.clone();

    rsx! {
        article { class: "rounded-lg border border-slate-800 bg-slate-950/60 p-4",
            div { class: "flex flex-wrap items-start justify-between gap-3",
                div {
                    h4 { class: "text-sm font-semibold text-slate-100", "{report.report_name}" }
                    p { class: "text-xs {theme::TEXT_MUTED}", "{period} · generated {generated}" }
                }
                div { class: "flex items-center gap-2",
                    Badge { label: kind, tone }
                    button {
                        class: "{theme::BTN_SMALL}",
                        onclick: move |_| on_download.call(target.clone()),
                        "⬇ CSV"
                    }
                }
            }
            div { class: "mt-3 grid grid-cols-3 gap-3 text-sm {theme::TEXT_SECONDARY}",
                span { "📦 {report.total_shipments} shipments" }
                span { "🏭 {emissions}" }
                span { "⚖️ {average}" }
            }
        }
    }
}
