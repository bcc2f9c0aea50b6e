//! Implements InputPort. Inquire-based screen flow: home -> upload -> result.
//!
//! The flow is strictly sequential, so at most one upload is ever in flight;
//! the upload prompt simply is not offered again until the call settles.

use crate::domain::{AppStore, Domain, DomainError, UploadState};
use crate::ports::InputPort;
use crate::usecases::UploadService;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{Confirm, InquireError, Select};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Applies the prompt theme for all subsequent inquire prompts.
/// Call once at startup.
pub fn apply_theme() {
    let cfg = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("●").with_fg(Color::LightCyan))
        .with_selected_option(Some(StyleSheet::new().with_fg(Color::LightCyan)));
    inquire::set_global_render_config(cfg);
}

const CHOOSE_IMAGE: &str = "Choose image";
const CHANGE_IMAGE: &str = "Change image";
const UPLOAD: &str = "Upload";
const BACK: &str = "Back to home";

enum HomeAction {
    SelectDomain,
    Quit,
}

impl fmt::Display for HomeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeAction::SelectDomain => f.write_str("Select a domain"),
            HomeAction::Quit => f.write_str("Quit"),
        }
    }
}

struct DomainChoice(Domain);

impl fmt::Display for DomainChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.0.name, self.0.description)
    }
}

/// Esc and Ctrl-C both mean "leave this prompt", never a crash.
fn prompt_or_back<T>(res: Result<Option<T>, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(answer) => Ok(answer),
        Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Input(e.to_string())),
    }
}

fn upload_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// TUI adapter. Inquire prompts over the injected store and upload service.
pub struct Tui {
    store: Arc<AppStore>,
    service: Arc<UploadService>,
}

impl Tui {
    pub fn new(store: Arc<AppStore>, service: Arc<UploadService>) -> Self {
        Self { store, service }
    }

    fn choose_domain(&self, domains: &[Domain]) -> Result<Option<Domain>, DomainError> {
        if domains.is_empty() {
            println!("No domains configured.");
            return Ok(None);
        }
        let options: Vec<DomainChoice> = domains.iter().cloned().map(DomainChoice).collect();
        let chosen = prompt_or_back(Select::new("Analysis domain", options).prompt_skippable())?;
        Ok(chosen.map(|choice| choice.0))
    }

    async fn upload_screen(&self) -> Result<(), DomainError> {
        loop {
            let state = self.store.snapshot().await;
            let Some(domain) = state.selected_domain.clone() else {
                return Ok(());
            };

            println!();
            println!("{} - {}", domain.name, domain.description);
            println!("Endpoint: {}", domain.endpoint);
            println!("Credits remaining: {}", state.credits);
            match &state.selected_image {
                Some(image) => println!("Image: {}", image.file_name()),
                None => println!("Image: none selected"),
            }
            if let Some(error) = &state.error {
                println!("Upload failed: {}", error);
            }

            let pick_label = if state.selected_image.is_some() {
                CHANGE_IMAGE
            } else {
                CHOOSE_IMAGE
            };
            let options = vec![pick_label, UPLOAD, BACK];
            let Some(choice) =
                prompt_or_back(Select::new("Next step", options).prompt_skippable())?
            else {
                return Ok(());
            };

            match choice {
                c if c == UPLOAD => {
                    if self.do_upload(&domain).await? {
                        return Ok(());
                    }
                }
                c if c == BACK => return Ok(()),
                _ => self.do_pick().await?,
            }
        }
    }

    async fn do_pick(&self) -> Result<(), DomainError> {
        match self.service.pick_image().await {
            Ok(Some(image)) => {
                println!("Selected {}", image.file_name());
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(DomainError::Permission(path)) => {
                // Alert only; permission problems are never stored.
                println!("Permission required: cannot read {}", path);
                Ok(())
            }
            Err(DomainError::Validation(message)) => {
                println!("{}", message);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Returns `true` when the flow finished on the result screen and the
    /// caller should unwind to home.
    async fn do_upload(&self, domain: &Domain) -> Result<bool, DomainError> {
        let spinner = upload_spinner(format!("Uploading to {}...", domain.name));
        let result = self.service.upload_selected().await;
        spinner.finish_and_clear();

        match result {
            Ok(_) => {
                self.result_screen().await?;
                Ok(true)
            }
            Err(DomainError::Validation(message)) => {
                println!("{}", message);
                Ok(false)
            }
            Err(DomainError::Cancelled) => Ok(false),
            Err(
                DomainError::Upload(_) | DomainError::Parse(_) | DomainError::Network(_),
            ) => {
                // Stored by the service; the screen header shows it inline.
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    async fn result_screen(&self) -> Result<(), DomainError> {
        let state = self.store.snapshot().await;

        println!();
        match &state.selected_domain {
            Some(domain) => println!("Domain: {} ({})", domain.name, domain.endpoint),
            None => println!("Domain: not specified"),
        }
        println!(
            "Status: {}",
            state.upload_state.to_string().to_uppercase()
        );
        match &state.last_response {
            Some(payload) => {
                let pretty = serde_json::to_string_pretty(&Value::Object(payload.clone()))
                    .unwrap_or_else(|_| "Unable to format response payload.".to_string());
                println!("{}", pretty);
            }
            None => {
                println!("No analysis has been performed yet. Upload an image to receive a response.")
            }
        }

        let _ = prompt_or_back(
            Confirm::new("Return home?")
                .with_default(true)
                .prompt_skippable(),
        )?;

        // Leaving the result screen clears the finished flow; domain choice
        // and credits survive.
        self.store.reset_flow().await;
        Ok(())
    }
}

#[async_trait]
impl InputPort for Tui {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let state = self.store.snapshot().await;
            debug_assert_ne!(state.upload_state, UploadState::Uploading);

            println!();
            println!("Available credits: {}", state.credits);

            let actions = vec![HomeAction::SelectDomain, HomeAction::Quit];
            let Some(action) = prompt_or_back(Select::new("Blink", actions).prompt_skippable())?
            else {
                return Ok(());
            };

            match action {
                HomeAction::SelectDomain => {
                    if let Some(domain) = self.choose_domain(&state.domains)? {
                        self.store.select_domain(domain).await;
                        self.upload_screen().await?;
                    }
                }
                HomeAction::Quit => return Ok(()),
            }
        }
    }
}
