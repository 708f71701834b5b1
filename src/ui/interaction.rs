use anyhow::Result;
use dialoguer::console::Term;
use dialoguer::{Select, theme::ColorfulTheme};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("cancelled by user")]
pub struct UserCancelled;

pub fn prompt_or_cancel<T>(result: dialoguer::Result<T>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => {
            let _ = Term::stdout().show_cursor();
            let _ = Term::stderr().show_cursor();
            match err {
                dialoguer::Error::IO(io_err)
                    if io_err.kind() == std::io::ErrorKind::Interrupted =>
                {
                    Err(UserCancelled.into())
                }
                other => Err(other.into()),
            }
        }
    }
}

pub fn confirm_yes_no(prompt: &str) -> Result<bool> {
    let theme = ColorfulTheme::default();
    let options = ["Yes", "No"];
    let idx = prompt_or_cancel(
        Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(&options)
            .default(0)
            .interact(),
    )?;
    Ok(idx == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_interrupt_maps_to_user_cancelled_error() {
        let err = dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::Interrupted,
            "ctrl-c",
        ));
        let result = prompt_or_cancel::<()>(Err(err));
        assert!(result.is_err());
        let got = result.unwrap_err();
        assert!(got.downcast_ref::<UserCancelled>().is_some());
    }
}
