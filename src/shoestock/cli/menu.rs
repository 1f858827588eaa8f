//! Interactive numbered menu.
//!
//! Reads from any `BufRead` and writes to any `Write`, so the loop can be
//! driven by a terminal or by a scripted buffer in tests. Operation failures
//! are reported and the menu comes back; only I/O failures on the console
//! itself end the loop. End of input counts as choosing Exit.

use super::render::{render_messages, render_shoe_table, render_value_table};
use shoestock::api::{CmdMessage, InventoryApi};
use shoestock::commands::{CaptureInput, CmdResult};
use shoestock::error::{Result, StockError};
use shoestock::store::Resource;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewAll,
    Capture,
    Restock,
    FindByCode,
    Values,
    Highest,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ViewAll,
        MenuChoice::Capture,
        MenuChoice::Restock,
        MenuChoice::FindByCode,
        MenuChoice::Values,
        MenuChoice::Highest,
        MenuChoice::Exit,
    ];

    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ViewAll => "View all shoes",
            MenuChoice::Capture => "Capture shoes",
            MenuChoice::Restock => "Re-stock shoes",
            MenuChoice::FindByCode => "Find shoes by code",
            MenuChoice::Values => "Display value per item",
            MenuChoice::Highest => "Find the highest quantity in stock",
            MenuChoice::Exit => "Exit",
        }
    }
}

struct Console<'a, I: BufRead, W: Write> {
    input: &'a mut I,
    out: &'a mut W,
}

impl<I: BufRead, W: Write> Console<'_, I, W> {
    /// Prompt and read one line. `None` means the input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn show(&mut self, result: &CmdResult) -> io::Result<()> {
        write!(self.out, "{}", render_messages(&result.messages))?;
        if !result.listed_shoes.is_empty() {
            write!(self.out, "{}", render_shoe_table(&result.listed_shoes))?;
        }
        if !result.valued_shoes.is_empty() {
            write!(self.out, "{}", render_value_table(&result.valued_shoes))?;
        }
        Ok(())
    }

    fn report(&mut self, outcome: Result<CmdResult>) -> io::Result<()> {
        match outcome {
            Ok(result) => self.show(&result),
            Err(e) => self.error(e),
        }
    }

    fn error(&mut self, e: StockError) -> io::Result<()> {
        write!(
            self.out,
            "{}",
            render_messages(&[CmdMessage::error(e.to_string())])
        )
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, " ----Main Menu----")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }
}

pub fn run<R: Resource, I: BufRead, W: Write>(
    api: &mut InventoryApi<R>,
    input: &mut I,
    out: &mut W,
) -> io::Result<()> {
    let mut console = Console { input, out };
    let last = MenuChoice::ALL.len();

    loop {
        console.print_menu()?;
        let Some(answer) = console.ask(&format!("Please enter your choice (1-{}): ", last))? else {
            break;
        };

        let answer = answer.trim();
        let Ok(number) = answer.parse::<usize>() else {
            console.error(StockError::InvalidInput(format!(
                "'{}' is not a number between 1 and {}",
                answer, last
            )))?;
            continue;
        };
        let Some(choice) = MenuChoice::from_number(number) else {
            console.error(StockError::InvalidInput(format!(
                "{} is not a menu option, please try again",
                number
            )))?;
            continue;
        };

        let keep_going = match choice {
            MenuChoice::ViewAll => {
                console.report(api.view_all())?;
                true
            }
            MenuChoice::Capture => capture(api, &mut console)?,
            MenuChoice::Restock => restock(api, &mut console)?,
            MenuChoice::FindByCode => match console.ask("Enter shoe code you wish to find: ")? {
                Some(code) => {
                    console.report(api.find_by_code(&code))?;
                    true
                }
                None => false,
            },
            MenuChoice::Values => {
                console.report(api.values())?;
                true
            }
            MenuChoice::Highest => {
                console.report(api.highest_stock())?;
                true
            }
            MenuChoice::Exit => false,
        };

        if !keep_going {
            break;
        }
    }

    let unsaved = api.unsaved_count();
    let mut farewell = Vec::new();
    if unsaved > 0 {
        farewell.push(CmdMessage::warning(format!(
            "{} captured shoe(s) were not saved to {}",
            unsaved,
            api.store().resource().location()
        )));
    }
    farewell.push(CmdMessage::info("Exit. See you next time!"));
    write!(console.out, "{}", render_messages(&farewell))?;
    console.out.flush()
}

/// Returns `false` when input ran out mid-operation.
fn capture<R: Resource, I: BufRead, W: Write>(
    api: &mut InventoryApi<R>,
    console: &mut Console<'_, I, W>,
) -> io::Result<bool> {
    let prompts = [
        "Enter the country of origin: ",
        "Enter the unique product code: ",
        "Enter the product name: ",
        "Enter the shoe price: ",
        "Enter the quantity of shoes: ",
    ];
    let mut answers = Vec::with_capacity(prompts.len());
    for prompt in prompts {
        match console.ask(prompt)? {
            Some(answer) => answers.push(answer),
            None => return Ok(false),
        }
    }

    let mut answers = answers.into_iter();
    let mut next = || answers.next().unwrap_or_default();
    let input = CaptureInput {
        origin: next(),
        code: next(),
        name: next(),
        unit_cost: next(),
        quantity: next(),
    };

    console.report(api.capture(&input))?;
    Ok(true)
}

/// Returns `false` when input ran out mid-operation.
fn restock<R: Resource, I: BufRead, W: Write>(
    api: &mut InventoryApi<R>,
    console: &mut Console<'_, I, W>,
) -> io::Result<bool> {
    let lowest = match api.lowest_stock() {
        Ok(result) => result,
        Err(e) => {
            console.error(e)?;
            return Ok(true);
        }
    };
    console.show(&lowest)?;
    let Some(id) = lowest.selected else {
        return Ok(true);
    };

    let Some(confirm) = console.ask("Do you want to add stock? (yes/no): ")? else {
        return Ok(false);
    };
    if !matches!(confirm.trim().to_lowercase().as_str(), "yes" | "y") {
        console.show(&CmdResult::default().with_message(CmdMessage::info("No changes made")))?;
        return Ok(true);
    }

    let Some(amount) = console.ask("How many pairs would you like to add? ")? else {
        return Ok(false);
    };
    match amount.trim().parse::<i64>() {
        Ok(delta) => console.report(api.restock(id, delta))?,
        Err(_) => console.error(StockError::InvalidInput(format!(
            "'{}' is not a whole number",
            amount.trim()
        )))?,
    }
    Ok(true)
}
