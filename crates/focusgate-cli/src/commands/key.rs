use clap::Subcommand;

#[derive(Subcommand)]
pub enum KeyAction {
    /// Store the classifier API key in the OS keyring
    Set {
        api_key: String,
    },
    /// Remove the stored API key
    Clear,
    /// Report whether an API key is stored
    Status,
}

pub async fn run(action: KeyAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = super::controller()?;
    match action {
        KeyAction::Set { api_key } => {
            controller.set_api_key(&api_key).await?;
            println!("API key stored; classification will use the remote model.");
        }
        KeyAction::Clear => {
            controller.clear_api_key().await?;
            println!("API key removed; classification falls back to keywords.");
        }
        KeyAction::Status => {
            if controller.has_api_key().await? {
                println!("An API key is stored.");
            } else {
                println!("No API key stored.");
            }
        }
    }
    Ok(())
}
