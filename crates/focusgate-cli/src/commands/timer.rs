use chrono::Utc;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start a focus session now
    Start {
        /// Focus phase length in minutes
        #[arg(long, default_value_t = 25)]
        focus_min: u64,
        /// Break phase length in minutes
        #[arg(long, default_value_t = 10)]
        break_min: u64,
    },
    /// Stop the running session
    Stop,
    /// Show the current phase and remaining time
    Status,
}

pub async fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = super::controller()?;
    match action {
        TimerAction::Start {
            focus_min,
            break_min,
        } => {
            let record = controller.start_timer(focus_min, break_min).await?;
            println!(
                "{} started: {} remaining",
                record.phase.label(),
                record.format_remaining(Utc::now())
            );
        }
        TimerAction::Stop => {
            controller.stop_timer().await?;
            println!("Timer stopped.");
        }
        TimerAction::Status => match controller.timer_status().await? {
            Some(record) => println!(
                "{}: {} remaining",
                record.phase.label(),
                record.format_remaining(Utc::now())
            ),
            None => println!("Timer is not running."),
        },
    }
    Ok(())
}
