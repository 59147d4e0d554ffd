use std::time::Duration;

use chrono::Utc;
use clap::Args;
use focusgate_core::{evaluation_queue, Evaluation, Trigger, ViewSnapshot};

#[derive(Args)]
pub struct EvaluateArgs {
    /// Candidate titles (repeatable)
    #[arg(long = "title", required = true)]
    pub titles: Vec<String>,
    /// Title of the item currently being consumed
    #[arg(long)]
    pub current: Option<String>,
    /// Keep evaluating on a periodic tick until interrupted
    #[arg(long)]
    pub follow: bool,
    /// Tick interval in seconds for --follow
    #[arg(long, default_value_t = 1)]
    pub interval: u64,
}

pub async fn run(args: EvaluateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = super::controller()?;
    let view = ViewSnapshot {
        items: args.titles,
        current: args.current,
    };

    if !args.follow {
        render(&controller.evaluate(&view).await?);
        return Ok(());
    }

    let (dispatcher, mut queue) = evaluation_queue(1);
    let ticker = dispatcher.clone();
    let interval = args.interval.max(1);
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(Duration::from_secs(interval));
        loop {
            tick.tick().await;
            ticker.request(Trigger::Tick);
        }
    });

    while let Some(_trigger) = queue.next_request().await {
        render(&controller.evaluate(&view).await?);
    }
    Ok(())
}

fn render(evaluation: &Evaluation) {
    match evaluation {
        Evaluation::Disabled => println!("Filtering disabled (no task configured)."),
        Evaluation::OnBreak { timer } => println!(
            "Break: {} remaining -- filtering suspended.",
            timer.format_remaining(Utc::now())
        ),
        Evaluation::Filtered {
            verdicts,
            intervene,
            timer,
        } => {
            if let Some(timer) = timer {
                println!(
                    "{}: {} remaining",
                    timer.phase.label(),
                    timer.format_remaining(Utc::now())
                );
            }
            for verdict in verdicts {
                let marker = if verdict.relevant { "keep" } else { "hide" };
                println!("{marker}: {}", verdict.text);
            }
            if *intervene {
                println!("Current item looks off-topic: prompt the user.");
            }
        }
    }
}
