//! Demo binary: scripts an editing session against the in-memory
//! store and prints the exported configuration.

use std::sync::Arc;

use clap::Command;
use intake_core::{EditorSession, SessionConfig, TracingSink};
use intake_gesture::DragEvent;
use intake_model::{FieldDraft, FieldType, SectionDraft};
use intake_store::{sample_templates, MemoryStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Command::new("intake-editor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Intake form template editor core")
        .arg_required_else_help(false)
        .subcommand(Command::new("demo").about("Run a scripted editing session"))
        .subcommand(Command::new("samples").about("List the built-in sample templates"));

    match cli.get_matches().subcommand() {
        Some(("samples", _)) => {
            for template in sample_templates() {
                println!(
                    "{} [{}] - {} section(s)",
                    template.name,
                    template.domain,
                    template.sections.len()
                );
            }
            Ok(())
        }
        _ => run_demo().await,
    }
}

/// Assemble a small form, move a category by gesture, save, export.
async fn run_demo() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let sink = Arc::new(TracingSink);
    let mut session = EditorSession::new(store, sink, SessionConfig::default());

    session.new_template("Demo Intake")?;
    let history = session.add_section(SectionDraft::new("History", "Patient history"))?;
    let assessment = session.add_section(SectionDraft::new("Assessment", ""))?;
    let allergies = session.add_category(&history, SectionDraft::new("Allergies", ""))?;
    session.add_field(
        &allergies,
        FieldDraft::new("Drug Allergies", FieldType::Text).required(),
    )?;

    // Drag the Allergies category from History onto Assessment.
    let _ = session.handle_drag(DragEvent::SectionDragStart {
        section: allergies.clone(),
    });
    let _ = session.handle_drag(DragEvent::SectionDragOver {
        section: assessment.clone(),
    });
    let _ = session.handle_drag(DragEvent::DropOnSection {
        target: assessment.clone(),
    });
    let _ = session.handle_drag(DragEvent::DragEnd);

    session.save_template().await?;
    session.save_configuration().await?;

    let document = session.export_configuration();
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
