use std::path::Path;

use chrono::{DateTime, Utc};
use clap::Args;
use focus_recruitment::catalog::{Catalog, ListingId};
use focus_recruitment::config::AppConfig;
use focus_recruitment::error::AppError;
use focus_recruitment::telemetry;
use focus_recruitment::workflows::apply::{
    auto_close_delay, ApplicationDraft, ApplicationError, ApplicationPolicy,
    ApplicationWorkflow, TracingApplicationLog,
};
use focus_recruitment::workflows::contact::{
    ContactDraft, ContactError, ContactKind, ContactWorkflow, EmailDispatcher, EmailJsDispatcher,
    RecruitmentService,
};
use focus_recruitment::workflows::CvAttachment;

use crate::infra::DryRunDispatcher;

#[derive(Args, Debug)]
pub(crate) struct ApplyArgs {
    /// Listing number as shown by the jobs command
    #[arg(long)]
    pub(crate) job: u32,
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    #[arg(long, default_value = "")]
    pub(crate) email: String,
    #[arg(long, default_value = "")]
    pub(crate) phone: String,
    #[arg(long)]
    pub(crate) message: Option<String>,
    /// CV file; only its name is recorded
    #[arg(long)]
    pub(crate) cv: Option<String>,
    /// Accept applications without a CV
    #[arg(long)]
    pub(crate) cv_optional: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ContactArgs {
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    #[arg(long, default_value = "")]
    pub(crate) email: String,
    #[arg(long, default_value = "")]
    pub(crate) message: String,
    /// candidate or company
    #[arg(long, default_value = "company", value_parser = parse_kind)]
    pub(crate) kind: ContactKind,
    /// permanent, contract, executive or other
    #[arg(long, value_parser = parse_service)]
    pub(crate) service: Option<RecruitmentService>,
    /// CV file; only its name is sent
    #[arg(long)]
    pub(crate) cv: Option<String>,
    /// Print the template parameters instead of calling EmailJS
    #[arg(long)]
    pub(crate) dry_run: bool,
}

fn parse_kind(raw: &str) -> Result<ContactKind, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "candidate" => Ok(ContactKind::Candidate),
        "company" => Ok(ContactKind::Company),
        other => Err(format!("unknown contact type '{other}' (candidate|company)")),
    }
}

fn parse_service(raw: &str) -> Result<RecruitmentService, String> {
    RecruitmentService::parse(raw).ok_or_else(|| {
        format!("unknown service '{raw}' (permanent|contract|executive|other)")
    })
}

fn cv_from_path(raw: &str) -> CvAttachment {
    let file_name = Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(raw);
    CvAttachment::new(file_name)
}

pub(crate) fn run_apply(args: ApplyArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let catalog = Catalog::embedded()?;
    apply_to_listing(&catalog, args, Utc::now())
}

fn apply_to_listing(
    catalog: &Catalog,
    args: ApplyArgs,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let job = catalog.get(ListingId(args.job))?;

    let policy = ApplicationPolicy {
        require_cv: !args.cv_optional,
    };
    let mut workflow = ApplicationWorkflow::new(policy);
    workflow.open(job);
    let draft = ApplicationDraft {
        full_name: args.name,
        email: args.email,
        phone: args.phone,
        message: args.message,
        cv: args.cv.as_deref().map(cv_from_path),
    };
    let outcome = workflow
        .update_draft(draft)
        .map_err(ApplicationError::from)
        .and_then(|()| workflow.submit(&TracingApplicationLog, now));

    match outcome {
        Ok(application) => {
            println!("Application submitted for {}", application.job.title);
            println!(
                "The dialog closes automatically after {} seconds.",
                auto_close_delay().num_seconds()
            );
            if workflow.poll(now + auto_close_delay()) {
                println!("Application dialog closed.");
            }
            Ok(())
        }
        Err(ApplicationError::Rejected { missing }) => {
            eprintln!("Application not submitted. Missing fields:");
            for field in &missing {
                eprintln!("  - {field}");
            }
            Err(ApplicationError::Rejected { missing }.into())
        }
        Err(err) => Err(err.into()),
    }
}

pub(crate) async fn run_contact(args: ContactArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mut draft = ContactDraft {
        name: args.name,
        email: args.email,
        message: args.message,
        ..ContactDraft::default()
    };
    draft.set_kind(args.kind);
    draft.service = args.service;
    draft.cv = args.cv.as_deref().map(cv_from_path);

    let dispatcher: Box<dyn EmailDispatcher> = if args.dry_run {
        Box::new(DryRunDispatcher)
    } else {
        Box::new(EmailJsDispatcher::new(config.email))
    };

    let mut workflow = ContactWorkflow::with_draft(draft);
    match workflow.submit(dispatcher.as_ref()).await {
        Ok(()) => {
            println!("Thank you for your message! We'll get back to you soon.");
            Ok(())
        }
        Err(ContactError::Invalid(errors)) => {
            eprintln!("Please fix the following:");
            for field in errors.fields() {
                if let Some(message) = errors.get(field) {
                    eprintln!("  - {field}: {message}");
                }
            }
            Err(ContactError::Invalid(errors).into())
        }
        Err(err) => Err(err.into()),
    }
}
