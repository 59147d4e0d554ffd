use chrono::Utc;
use clap::Args;
use focusgate_core::{Evaluation, ViewSnapshot};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Title to classify against the configured task
    pub title: String,
}

pub async fn run(args: ClassifyArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = super::controller()?;
    let view = ViewSnapshot {
        items: vec![args.title],
        current: None,
    };

    match controller.evaluate(&view).await? {
        Evaluation::Disabled => println!("No focus configured; filtering is disabled."),
        Evaluation::OnBreak { timer } => println!(
            "On break ({} left); filtering is suspended.",
            timer.format_remaining(Utc::now())
        ),
        Evaluation::Filtered { verdicts, .. } => {
            for verdict in verdicts {
                let marker = if verdict.relevant { "on-topic" } else { "off-topic" };
                println!("{marker}: {}", verdict.text);
            }
        }
    }
    Ok(())
}
