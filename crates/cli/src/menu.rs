//! Line-oriented interactive loop.
//!
//! Generic over its input and its two output streams so tests can script a
//! whole session. Prompts and listings go to `output`; rejected operations
//! are reported on `errors`.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use shelflife_auth::Capability;
use shelflife_core::DomainError;
use shelflife_inventory::{FoodItem, validate_name, validate_quantity};

use crate::AppContext;

const LOGGED_OUT_MENU: &str = "1. Login\n2. Signup\n3. Exit\nEnter your choice: ";
const LOGGED_IN_MENU: &str = "1. Add Food Item (Restaurant)\n\
                              2. View Food Items (People)\n\
                              3. View Expiring Items (People)\n\
                              4. Notifications (People)\n\
                              5. Logout\n\
                              Enter your choice: ";

/// Errors that end the loop. Domain errors never do; they are printed and
/// the menu is shown again.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("input stream closed")]
    InputClosed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Result of a single menu step.
enum Step {
    Continue,
    Exit,
}

/// Failure of a single menu step.
#[derive(Debug, Error)]
enum StepError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Fatal(#[from] MenuError),
}

impl From<io::Error> for StepError {
    fn from(err: io::Error) -> Self {
        StepError::Fatal(MenuError::Io(err))
    }
}

pub struct Menu<R, W, E> {
    ctx: AppContext,
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Menu<R, W, E> {
    pub fn new(ctx: AppContext, input: R, output: W, errors: E) -> Self {
        Self {
            ctx,
            input,
            output,
            errors,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn errors(&self) -> &E {
        &self.errors
    }

    /// Loop until the user chooses Exit.
    ///
    /// Returns an error only when the terminal itself fails, including the
    /// input stream closing before Exit was chosen.
    pub fn run(&mut self) -> Result<(), MenuError> {
        loop {
            let step = if self.ctx.session().is_active() {
                self.user_actions()
            } else {
                self.login_signup()
            };

            match step {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => {
                    tracing::info!("exit requested");
                    return Ok(());
                }
                Err(StepError::Domain(err)) => {
                    tracing::debug!(error = %err, "operation rejected");
                    writeln!(self.errors, "Error: {err}")?;
                    self.errors.flush()?;
                }
                Err(StepError::Fatal(err)) => return Err(err),
            }
        }
    }

    fn login_signup(&mut self) -> Result<Step, StepError> {
        match self.choice(LOGGED_OUT_MENU, 3)? {
            1 => self.login()?,
            2 => self.signup()?,
            _ => return Ok(Step::Exit),
        }
        Ok(Step::Continue)
    }

    fn user_actions(&mut self) -> Result<Step, StepError> {
        match self.choice(LOGGED_IN_MENU, 5)? {
            1 => self.add_food_item()?,
            2 => self.view_food_items()?,
            3 => self.view_expiring_items()?,
            4 => self.view_notifications()?,
            _ => self.ctx.logout(),
        }
        Ok(Step::Continue)
    }

    fn login(&mut self) -> Result<(), StepError> {
        let username = self.prompt("Enter username: ")?;
        let credential = self.prompt("Enter password: ")?;

        if self.ctx.login(&username, &credential) {
            writeln!(self.output, "Login successful. Welcome, {username}!")?;
        } else {
            writeln!(self.output, "{}", DomainError::AuthenticationFailed)?;
        }
        Ok(())
    }

    fn signup(&mut self) -> Result<(), StepError> {
        let username = self.prompt("Enter username: ")?;
        self.ctx.ensure_username_available(&username)?;
        let credential = self.prompt("Enter password: ")?;
        let role = self.prompt("Enter user type (people or restaurant): ")?;

        self.ctx.signup(&username, &credential, &role)?;
        writeln!(self.output, "Signup successful. You can now log in.")?;
        Ok(())
    }

    fn add_food_item(&mut self) -> Result<(), StepError> {
        self.ctx.require(Capability::AddFoodItem)?;

        // Each field is checked as soon as it is read.
        let name = self.prompt("Enter food item name: ")?;
        validate_name(&name)?;
        let quantity = self.prompt_number("Enter quantity: ")?;
        validate_quantity(quantity)?;
        let days = self.prompt_number("Enter days to expiration: ")?;

        self.ctx.add_food_item(&name, quantity, days)?;
        writeln!(self.output, "Food item added successfully.")?;
        Ok(())
    }

    fn view_food_items(&mut self) -> Result<(), StepError> {
        let items = self.ctx.view_food_items()?;
        writeln!(self.output, "Food Items:")?;
        write_items(&mut self.output, &items)?;
        Ok(())
    }

    fn view_expiring_items(&mut self) -> Result<(), StepError> {
        let items = self.ctx.view_expiring_items()?;
        writeln!(self.output, "Expiring Food Items:")?;
        write_items(&mut self.output, &items)?;
        Ok(())
    }

    fn view_notifications(&mut self) -> Result<(), StepError> {
        let notifications = self.ctx.view_notifications()?;
        writeln!(self.output, "Notifications:")?;
        for n in &notifications {
            writeln!(
                self.output,
                "Message: {}, Recipient: {}",
                n.message(),
                n.recipient()
            )?;
        }
        Ok(())
    }

    /// Show `menu` and read an option in `1..=max`.
    fn choice(&mut self, menu: &str, max: i64) -> Result<i64, StepError> {
        let raw = self.prompt(menu)?;
        match raw.parse::<i64>() {
            Ok(n) if (1..=max).contains(&n) => Ok(n),
            _ => Err(DomainError::invalid_input("Invalid choice. Try again.").into()),
        }
    }

    fn prompt_number(&mut self, label: &str) -> Result<i64, StepError> {
        let raw = self.prompt(label)?;
        raw.parse::<i64>().map_err(|_| {
            DomainError::invalid_input(format!("Expected a whole number, got '{raw}'.")).into()
        })
    }

    /// Print `label`, then read one line with surrounding whitespace removed.
    ///
    /// A line that is not UTF-8 is rejected like any other bad answer.
    fn prompt(&mut self, label: &str) -> Result<String, StepError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(MenuError::InputClosed.into());
        }
        let line = String::from_utf8(raw)
            .map_err(|_| DomainError::invalid_input("Input is not valid UTF-8."))?;
        Ok(line.trim().to_string())
    }
}

fn write_items<W: Write>(out: &mut W, items: &[&FoodItem]) -> io::Result<()> {
    for item in items {
        writeln!(
            out,
            "Name: {}, Quantity: {}, Expiration in {} days",
            item.name(),
            item.quantity(),
            item.shelf_life_days()
        )?;
    }
    Ok(())
}
