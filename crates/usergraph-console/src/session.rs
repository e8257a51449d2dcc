//! The prompt loop: reads lines, feeds the menu, prints responses.

use std::io::{BufRead, Write};

use crate::api::{ApiResponse, UserApi};
use crate::error::ClientError;
use crate::menu::{Action, Menu, Step, INVALID_OPTION, MENU, SELECT_PROMPT};

/// Drive the menu until option `0` or end of input.
///
/// Each dispatched action makes exactly one call on `api`; its raw body is
/// printed whatever the status. A failed call prints the error and the
/// loop continues.
pub fn run<A, R, W>(api: &A, input: R, mut out: W) -> Result<(), ClientError>
where
    A: UserApi + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut menu = Menu::new();
    show_menu(&mut out)?;

    for line in input.lines() {
        let line = line?;
        match menu.feed(&line) {
            Step::Prompt(prompt) => write!(out, "{prompt}")?,
            Step::Dispatch(action) => {
                let text = match perform(api, &action) {
                    Ok(response) => response.body,
                    Err(e) => {
                        tracing::warn!(error = %e, ?action, "API call failed");
                        e.to_string()
                    }
                };
                writeln!(out, "{text}")?;
                show_menu(&mut out)?;
            }
            Step::Invalid => {
                writeln!(out, "{INVALID_OPTION}")?;
                show_menu(&mut out)?;
            }
            Step::Exit => return Ok(()),
        }
        out.flush()?;
    }

    Ok(())
}

fn show_menu<W: Write>(out: &mut W) -> Result<(), ClientError> {
    write!(out, "{MENU}{SELECT_PROMPT}")?;
    out.flush()?;
    Ok(())
}

fn perform<A: UserApi + ?Sized>(api: &A, action: &Action) -> Result<ApiResponse, ClientError> {
    match action {
        Action::Create { name, age } => api.create_user(name, age),
        Action::Read { name } => api.read_user(name),
        Action::Update { name, age } => api.update_user(name, age),
        Action::Delete { name } => api.delete_user(name),
        Action::List => api.list_users(),
    }
}
