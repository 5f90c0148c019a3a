mod opener;

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use inquiry::{
    Catalog, Field, InquiryDraft, InquiryError, MailtoUri, MessageTemplate, SolutionReconciler, submit, validate,
};
use serde_json::json;

use crate::opener::OpenerHost;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Inquiry(#[from] InquiryError),
    #[error("failed to read catalog {path}: {source}")]
    CatalogRead { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "inquiry-cli", about = "Compose and inspect ESET quote-request mailto links")]
struct Cli {
    /// JSON catalog (`[{"id","name","summary"}]`) replacing the built-in one.
    #[arg(long, global = true, env = "INQUIRY_CATALOG")]
    catalog: Option<PathBuf>,

    /// Print machine-readable JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the solutions offered in the form.
    Catalog,
    /// Validate an inquiry and print its mailto link.
    Compose(ComposeArgs),
    /// Decode a mailto link back into recipient, subject and body.
    Decode { uri: String },
}

/// Required fields default to empty so validation reports every missing one.
#[derive(Args, Debug)]
struct ComposeArgs {
    /// Solution name or catalog id; defaults to the catalog's first entry.
    #[arg(long)]
    solution: Option<String>,
    #[arg(long, default_value = "")]
    quantity: String,
    #[arg(long, default_value = "")]
    company: String,
    #[arg(long, default_value = "")]
    contact: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    remarks: String,
    /// Hand the link to the system mail client.
    #[arg(long)]
    open: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_ref())?;

    match cli.command {
        Command::Catalog => run_catalog(&catalog, cli.json),
        Command::Compose(args) => run_compose(&catalog, args, cli.json),
        Command::Decode { uri } => run_decode(&uri, cli.json),
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog, CliError> {
    let Some(path) = path else {
        return Ok(Catalog::builtin().clone());
    };
    let raw = fs::read_to_string(path).map_err(|source| CliError::CatalogRead { path: path.clone(), source })?;
    let catalog = Catalog::from_json(&raw)?;
    tracing::debug!(path = %path.display(), solutions = catalog.solutions().len(), "catalog loaded");
    Ok(catalog)
}

fn run_catalog(catalog: &Catalog, as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }
    for solution in catalog.solutions() {
        println!("{:<20} {}", solution.id, solution.name);
    }
    Ok(())
}

fn build_draft(catalog: &Catalog, args: &ComposeArgs) -> InquiryDraft {
    let mut draft = InquiryDraft::new(catalog);
    let solution = args
        .solution
        .as_deref()
        .map(|s| catalog.find_by_id(s).map_or(s, |found| found.name.as_str()));
    if SolutionReconciler::new().reconcile(&mut draft, solution) && !catalog.contains(&draft.solution) {
        tracing::warn!(solution = %draft.solution, "solution is not in the catalog");
    }
    draft.set_field(Field::Quantity, args.quantity.as_str());
    draft.set_field(Field::CompanyName, args.company.as_str());
    draft.set_field(Field::ContactName, args.contact.as_str());
    draft.set_field(Field::Phone, args.phone.as_str());
    draft.set_field(Field::Email, args.email.as_str());
    draft.set_field(Field::Remarks, args.remarks.as_str());
    draft
}

fn run_compose(catalog: &Catalog, args: ComposeArgs, as_json: bool) -> Result<(), CliError> {
    let draft = build_draft(catalog, &args);
    let template = MessageTemplate::quote_request();

    let (uri, message, notice, launched) = if args.open {
        let receipt = submit(&draft, &template, &mut OpenerHost::system())?;
        let launched = receipt.launched();
        (receipt.uri, receipt.message, Some(receipt.notice), Some(launched))
    } else {
        validate(&draft)?;
        let message = template.render(&draft);
        (MailtoUri::for_sales(message.clone()).to_string(), message, None, None)
    };

    if as_json {
        let out = json!({
            "draft": draft,
            "subject": message.subject,
            "body": message.body,
            "uri": uri,
            "notice": notice,
            "launched": launched,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Subject: {}\n\n{}\n\n{uri}", message.subject, message.body);
        if let Some(notice) = notice {
            eprintln!("{}", notice.text);
        }
    }
    Ok(())
}

fn run_decode(uri: &str, as_json: bool) -> Result<(), CliError> {
    let parsed = MailtoUri::parse(uri)?;
    if as_json {
        let out = json!({ "recipient": parsed.recipient, "subject": parsed.subject, "body": parsed.body });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("To: {}\nSubject: {}\n\n{}", parsed.recipient, parsed.subject, parsed.body);
    }
    Ok(())
}
