use chrono::{Local, NaiveDate};
use clap::Args;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use civic_portal::catalog::{
    CatalogSource, ServiceDescriptor, ServiceId, ServiceKind, StaticCatalog,
};
use civic_portal::error::AppError;
use civic_portal::intake::{
    FieldPolicy, FileAttachment, FlowPhase, IntakeFlow, IntakeForm, IntakeSink, PlaceholderSink,
    ReferenceField, ScheduleChoice, SinkError, SubmissionResult,
};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Service family to walk: licenses, tax, education, appointments, documents
    #[arg(long, default_value = "licenses", value_parser = ServiceKind::from_str)]
    pub(crate) kind: ServiceKind,
    /// Catalog id of the service to select (defaults to the first entry)
    #[arg(long)]
    pub(crate) service: Option<u32>,
    /// Applicant name to fill into the form
    #[arg(long, default_value = "Avery Quinn")]
    pub(crate) name: String,
    /// Applicant email to fill into the form
    #[arg(long, default_value = "avery.quinn@example.com")]
    pub(crate) email: String,
    /// Appointment date (YYYY-MM-DD). Defaults to today for appointment flows.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Make the first submission fail to demonstrate the retry path
    #[arg(long)]
    pub(crate) fail_submission: bool,
}

/// Sink that fails its first call and delegates afterwards, so the demo can
/// show the failed phase preserving the form and a retry succeeding.
struct FirstCallFails {
    tripped: AtomicBool,
    inner: PlaceholderSink,
}

impl FirstCallFails {
    fn new() -> Self {
        Self {
            tripped: AtomicBool::new(false),
            inner: PlaceholderSink::default(),
        }
    }
}

#[async_trait]
impl IntakeSink for FirstCallFails {
    async fn submit(
        &self,
        kind: ServiceKind,
        service: &ServiceDescriptor,
        form: &IntakeForm,
    ) -> Result<SubmissionResult, SinkError> {
        if !self.tripped.swap(true, Ordering::Relaxed) {
            return Err(SinkError::Unavailable("simulated outage".to_string()));
        }
        self.inner.submit(kind, service, form).await
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("State Portal intake demo: {}", args.kind.title());

    let catalog = Arc::new(StaticCatalog);
    if args.fail_submission {
        let sink = Arc::new(FirstCallFails::new());
        let flow = IntakeFlow::new(args.kind, catalog, sink);
        walk_flow(flow, args).await
    } else {
        let sink = Arc::new(PlaceholderSink::default());
        let flow = IntakeFlow::new(args.kind, catalog, sink);
        walk_flow(flow, args).await
    }
}

async fn walk_flow<C, S>(mut flow: IntakeFlow<C, S>, args: DemoArgs) -> Result<(), AppError>
where
    C: CatalogSource,
    S: IntakeSink,
{
    let phase = flow.begin().await?;

    println!("\nAvailable services:");
    for descriptor in flow.catalog() {
        println!(
            "  {}. {} - {}",
            descriptor.id, descriptor.name, descriptor.description
        );
    }

    if phase == FlowPhase::Selecting {
        let id = ServiceId(args.service.unwrap_or_else(|| flow.catalog()[0].id.0));
        let selected = flow.select(id)?;
        println!("\nSelected: {}", selected.name);
    } else if let Some(selected) = flow.selected_service() {
        println!("\nAuto-selected the only service: {}", selected.name);
    }

    let policy = flow.policy().copied().unwrap_or_default();
    let form = fill_form(&policy, args.name, args.email, args.date);
    print_form(&policy, &form);
    flow.update_form(form)?;

    println!("\nSubmitting to the {} intake endpoint...", flow.kind());
    let result = flow.submit().await?;
    println!("  [{}] {}", flow.phase().label(), result.message);

    if args.fail_submission && flow.phase() == FlowPhase::Failed {
        println!("\nForm entries were preserved; retrying the same submission...");
        let retried = flow.submit().await?;
        println!("  [{}] {}", flow.phase().label(), retried.message);
    }

    Ok(())
}

fn print_form(policy: &FieldPolicy, form: &IntakeForm) {
    println!("\nForm:");
    println!("  applicant: {} <{}>", form.applicant_name, form.email);
    if let (Some(field), Some(reference)) = (policy.reference, &form.reference) {
        println!("  {}: {}", field.label(), reference);
    }
    if let Some(amount) = &form.amount {
        println!("  amount: {amount}");
    }
    if let Some(details) = &form.details {
        println!("  details: {details}");
    }
    if let Some(attachment) = &form.attachment {
        println!(
            "  attachment: {} ({})",
            attachment.file_name, attachment.media_type
        );
    }
    if let Some(schedule) = &form.schedule {
        println!("  appointment: {} at {}", schedule.date, schedule.time);
    }
}

/// Synthesize a form that satisfies the selected service's field policy.
fn fill_form(
    policy: &FieldPolicy,
    name: String,
    email: String,
    date: Option<NaiveDate>,
) -> IntakeForm {
    let mut form = IntakeForm {
        applicant_name: name,
        email,
        ..IntakeForm::default()
    };

    if let Some(reference) = policy.reference {
        form.reference = Some(match reference {
            ReferenceField::TaxId => "TX-2210-4481".to_string(),
            ReferenceField::StudentId => "S-118-2042".to_string(),
        });
    }
    if policy.requires_amount {
        form.amount = Some("245.00".to_string());
    }
    if policy.requires_details {
        form.details = Some("Submitted through the command line walkthrough.".to_string());
    }
    if policy.requires_file {
        form.attachment = Some(FileAttachment {
            file_name: "supporting-document.pdf".to_string(),
            media_type: "application/pdf".to_string(),
            size_bytes: 48_221,
        });
    }
    if policy.requires_schedule {
        form.schedule = Some(ScheduleChoice {
            date: date.unwrap_or_else(|| Local::now().date_naive()),
            time: "10:30 AM".to_string(),
        });
    }

    form
}
