use clap::Subcommand;
use focusgate_core::{FocusProfile, Role, Strictness};

#[derive(Subcommand)]
pub enum FocusAction {
    /// Set the current task and filtering preferences
    Set {
        /// What you are working on
        #[arg(long)]
        task: String,
        /// Your role: student, programmer, teacher, researcher or other
        #[arg(long, default_value = "other")]
        role: String,
        /// Filter strictness: low, medium or high
        #[arg(long, default_value = "medium")]
        strictness: String,
        /// Enable the focus/break timer
        #[arg(long)]
        timer: bool,
        /// Focus phase length in minutes
        #[arg(long, default_value_t = 25)]
        focus_min: u64,
        /// Break phase length in minutes
        #[arg(long, default_value_t = 10)]
        break_min: u64,
    },
    /// Show the persisted focus configuration
    Show,
    /// Clear the persisted focus configuration
    Clear,
}

pub async fn run(action: FocusAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = super::controller()?;
    match action {
        FocusAction::Set {
            task,
            role,
            strictness,
            timer,
            focus_min,
            break_min,
        } => {
            let state = controller
                .set_focus(
                    task,
                    Role::from_name(&role),
                    Strictness::from_name(&strictness),
                    timer,
                    focus_min,
                    break_min,
                )
                .await?;
            let keyword_count = FocusProfile::build(&state)
                .map(|p| p.keywords.len())
                .unwrap_or(0);
            println!("Focus saved: \"{}\" ({keyword_count} keywords)", state.task);
        }
        FocusAction::Show => match controller.focus_state().await? {
            Some(state) => println!("{}", serde_json::to_string_pretty(&state)?),
            None => println!("No focus configured."),
        },
        FocusAction::Clear => {
            controller.clear_focus().await?;
            println!("Focus cleared.");
        }
    }
    Ok(())
}
