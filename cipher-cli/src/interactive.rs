//! The interactive menu loop and the console prompter behind it.

use crate::format;
use cipher_core::dispatch::{Cipher, Mode, Request, Variant, process};
use cipher_core::error::CipherError;
use cipher_core::prompt::{Prompter, gather_key_material, gather_options};
use cipher_core::random::RandomSource;
use log::{error, info};
use std::io::{self, BufRead, Write};

/// Reads answers from `input` and writes prompts to `output`.
pub(crate) struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub(crate) const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `text` as is. A console that cannot be written to is logged,
    /// not fatal: the answers can still be read.
    fn say(&mut self, text: &str) {
        let written = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(e) = written {
            error!("Failed to write to the console: {e}");
        }
    }

    fn read_line(&mut self) -> String {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                info!("Input closed, leaving the menu.");
                self.say("\n");
                std::process::exit(0);
            }
            Ok(_) => line.trim_end_matches(['\n', '\r']).to_string(),
            Err(e) => {
                error!("Failed to read from the console: {e}");
                std::process::exit(1);
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn prompt_text(&mut self, prompt: &str) -> String {
        self.say(prompt);
        self.read_line()
    }

    fn prompt_yes_no(&mut self, prompt: &str) -> bool {
        loop {
            self.say(&format!("{prompt} [Y]/[N] >> "));
            let reply = self.read_line().to_uppercase();
            if reply.contains('Y') {
                return true;
            }
            if reply.contains('N') {
                return false;
            }
            self.say("That wasn't a 'yes' or a 'no'...\n\n");
        }
    }

    fn notify(&mut self, message: &str) {
        self.say(&format!("{message}\n"));
    }
}

/// Shows a keystroke menu and returns the chosen entry, or `None` on quit.
fn choose<T: Copy>(
    console: &mut dyn Prompter,
    title: &str,
    entries: &[(char, &str, T)],
) -> Option<T> {
    loop {
        console.notify(title);
        for (key, name, _) in entries {
            console.notify(&format!("  [{key}] {name}"));
        }
        console.notify("  [Q] Quit");
        let reply = console.prompt_text(">> ");
        let reply = reply.trim();
        if reply.is_empty() {
            console.notify("You did not make a choice.");
            continue;
        }
        if reply.eq_ignore_ascii_case("q") || reply.eq_ignore_ascii_case("quit") {
            return None;
        }
        let found = entries.iter().find(|(key, name, _)| {
            reply.eq_ignore_ascii_case(name)
                || (reply.chars().count() == 1
                    && reply.chars().all(|c| c.eq_ignore_ascii_case(key)))
        });
        match found {
            Some(&(_, _, value)) => return Some(value),
            None => console.notify(&format!("Sorry, {reply} is not a valid option.")),
        }
    }
}

/// Asks for keys until they build a usable cipher, then for the options.
fn prepare(
    console: &mut dyn Prompter,
    variant: Variant,
    mode: Mode,
    text: &str,
) -> Result<Request, CipherError> {
    let cipher = loop {
        let keys = gather_key_material(console, variant, mode)?;
        match Cipher::build(variant, &keys) {
            Ok(cipher) => break cipher,
            Err(e) => console.notify(&format!("Sorry, that key cannot be used: {e}")),
        }
    };
    let options = gather_options(console, mode)?;
    Ok(Request {
        cipher,
        mode,
        text: text.to_string(),
        options,
    })
}

fn run_once(
    console: &mut dyn Prompter,
    variant: Variant,
    mode: Mode,
    text: &str,
    rng: &mut dyn RandomSource,
) {
    let request = match prepare(console, variant, mode, text) {
        Ok(request) => request,
        Err(e) if e.is_abort() => {
            console.notify("Process aborted.");
            return;
        }
        Err(e) => {
            console.notify(&format!("Sorry, {e}."));
            return;
        }
    };
    let response = process(&request, rng);
    if let Some(diagnostic) = response.diagnostic {
        console.notify(&format!("Sorry, the message could not be processed: {diagnostic}"));
        return;
    }

    let output = match mode {
        Mode::Encrypt => {
            let (blocks, wrap) = if variant == Variant::Polybius {
                let numbers = console
                    .prompt_yes_no("Would you like the output separated into two-digit numbers?");
                let lines = numbers
                    && console.prompt_yes_no(
                        "Would you like the encrypted text to be printed in 25-number lines?",
                    );
                (numbers, lines)
            } else {
                let blocks = console.prompt_yes_no(
                    "Would you like the encrypted text to be printed in five-character blocks?",
                );
                let lines = console
                    .prompt_yes_no("Would you like the output to be broken into separate lines?");
                (blocks, lines)
            };
            format::present(variant, &response.output, blocks, wrap)
        }
        Mode::Decrypt => response.output,
    };
    console.notify(&format!("Here is your result:  {output}"));
}

/// Runs the menu loop until the user quits.
pub(crate) fn run(rng: &mut dyn RandomSource) {
    let mut console = ConsolePrompter::new(io::stdin().lock(), io::stdout());
    let actions = [('E', "Encrypt", Mode::Encrypt), ('D', "Decrypt", Mode::Decrypt)];
    let ciphers: Vec<(char, &str, Variant)> = Variant::ALL
        .iter()
        .map(|&v| (v.keystroke(), v.name(), v))
        .collect();

    console.notify("Classical ciphers: encrypt and decrypt messages by hand.\n");
    loop {
        let Some(mode) = choose(&mut console, "What would you like to do?", &actions) else {
            break;
        };
        console.notify(&format!("You have chosen to {mode}.\n"));
        if let Some(variant) = choose(&mut console, "Which cipher?", &ciphers) {
            console.notify(&format!("You have selected {variant}.\n"));
            let text = console.prompt_text("Please enter your text, or [ENTER] to go back:\n>>  ");
            if !text.is_empty() {
                info!("{mode} with the {variant} cipher.");
                run_once(&mut console, variant, mode, &text, rng);
            }
        }
        if !console.prompt_yes_no("Run again?") {
            break;
        }
    }
    console.notify("Thank you for using the cipher toolkit!");
}
