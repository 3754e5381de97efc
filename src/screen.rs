use std::io::{ BufRead, Write };

use crate::clipboard::Clipboard;
use crate::errors::{ AppError, FormError };
use crate::form::PasswordForm;
use crate::generators::CharClass;

/// Toggle order as it appears on screen.
const TOGGLE_ORDER: [CharClass; 4] = [
    CharClass::Lower,
    CharClass::Upper,
    CharClass::Digits,
    CharClass::Symbols,
];

const HELP: &str = "\
Commands:
  length <n>   set the password length
  lower        toggle Include LowerCase
  upper        toggle Include UpperCase
  numbers      toggle Include Numbers
  symbols      toggle Include Symbols
  generate     generate a password
  reset        clear the form
  copy         copy the password to the clipboard
  help         show this help
  quit         exit";

#[derive(Debug, PartialEq, Eq)]
enum Event {
    Length(String),
    Toggle(CharClass),
    Generate,
    Reset,
    Copy,
    Help,
    Quit,
    Unknown(String),
}

fn parse_event(line: &str) -> Event {
    let trimmed = line.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "length" | "len" => Event::Length(rest.to_string()),
        "lower" | "lowercase" => Event::Toggle(CharClass::Lower),
        "upper" | "uppercase" => Event::Toggle(CharClass::Upper),
        "numbers" | "digits" => Event::Toggle(CharClass::Digits),
        "symbols" => Event::Toggle(CharClass::Symbols),
        "generate" | "g" => Event::Generate,
        "reset" | "r" => Event::Reset,
        "copy" | "c" => Event::Copy,
        "help" | "?" => Event::Help,
        "quit" | "exit" | "q" => Event::Quit,
        _ => Event::Unknown(trimmed.to_string()),
    }
}

pub fn render<W: Write>(form: &PasswordForm, out: &mut W) -> Result<(), AppError> {
    writeln!(out, "==== Password Generator ====")?;

    let field = if form.length_input().is_empty() {
        format!("<{}>", PasswordForm::LENGTH_PLACEHOLDER)
    } else {
        form.length_input().to_string()
    };
    writeln!(out, "Password Length : {}", field)?;
    if let Some(error) = form.length_error() {
        writeln!(out, "  ! {}", error)?;
    }

    let flags = form.flags();
    for class in TOGGLE_ORDER {
        let mark = if flags.is_set(class) { 'x' } else { ' ' };
        writeln!(out, "[{}] {} :", mark, class.label())?;
    }

    if let Some(reason) = form.blocked_reason() {
        log::trace!("generate disabled: {}", reason);
    }
    let generate = if form.submit_enabled() { "[Generate]" } else { "(Generate)" };
    writeln!(out, "{}  [Reset]", generate)?;

    if let (true, Some(password)) = (form.is_ready(), form.password()) {
        writeln!(out)?;
        writeln!(out, "Password Generated")?;
        writeln!(out, "{}", password)?;
    }

    Ok(())
}

pub fn run<R, W, C>(form: &mut PasswordForm, input: R, out: &mut W, clipboard: &mut C) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    C: Clipboard,
{
    render(form, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_event(&line) {
            Event::Length(text) => form.set_length(&text),
            Event::Toggle(class) => form.toggle(class),
            Event::Generate => {
                match form.submit().map(|_| ()) {
                    Ok(()) => (),
                    Err(FormError::SubmitDisabled(blocked)) => writeln!(out, "Generate is disabled: {}", blocked)?,
                    Err(e) => return Err(e.into()),
                }
                log::debug!("form is now {:?}", form.state());
            }
            Event::Reset => form.reset(),
            Event::Copy => match form.password() {
                Some(password) => {
                    clipboard.copy(password.as_str())?;
                    writeln!(out, "Copied to clipboard.")?;
                }
                None => writeln!(out, "{}", FormError::NothingToCopy)?,
            },
            Event::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Event::Quit => break,
            Event::Unknown(text) => {
                writeln!(out, "Unknown command: {} (type 'help')", text)?;
                continue;
            }
        }

        render(form, out)?;
        out.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::password::RngTier;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&mut self, text: &str) -> Result<(), AppError> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    fn drive(script: &str) -> (PasswordForm, String, RecordingClipboard) {
        let mut form = PasswordForm::new(RngTier::Fast);
        let mut out = Vec::new();
        let mut clipboard = RecordingClipboard::default();

        run(&mut form, Cursor::new(script), &mut out, &mut clipboard).unwrap();

        (form, String::from_utf8(out).unwrap(), clipboard)
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_event("length 8"), Event::Length("8".into()));
        assert_eq!(parse_event("  LEN   12 "), Event::Length("12".into()));
        assert_eq!(parse_event("length"), Event::Length(String::new()));
        assert_eq!(parse_event("numbers"), Event::Toggle(CharClass::Digits));
        assert_eq!(parse_event("q"), Event::Quit);
        assert_eq!(parse_event("dance"), Event::Unknown("dance".into()));
    }

    #[test]
    fn initial_render() {
        let form = PasswordForm::default();
        let mut out = Vec::new();
        render(&form, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Password Length : <Ex. 8>"));
        assert!(text.contains("[ ] Include LowerCase :"));
        assert!(text.contains("[ ] Include Symbols :"));
        assert!(text.contains("(Generate)  [Reset]"));
        assert!(!text.contains("Password Generated"));
    }

    #[test]
    fn generate_flow() {
        let (form, text, _) = drive("length 8\nnumbers\ngenerate\nquit\nlength 3\n");

        let password = form.password().unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
        assert!(text.contains("[x] Include Numbers :"));
        assert!(text.contains("[Generate]  [Reset]"));
        assert!(text.contains("Password Generated"));
        assert_eq!(form.length_input(), "8");
    }

    #[test]
    fn short_length_shows_error_and_blocks() {
        let (form, text, _) = drive("length 3\nupper\ngenerate\n");

        assert!(text.contains("  ! Must be between 4 and 16"));
        assert!(text.contains("Generate is disabled: Must be between 4 and 16"));
        assert!(form.password().is_none());
    }

    #[test]
    fn no_class_blocks() {
        let (form, text, _) = drive("length 8\ngenerate\n");

        assert!(text.contains("Generate is disabled: Select at least one character class"));
        assert!(!form.is_ready());
    }

    #[test]
    fn reset_returns_to_blank_form() {
        let (form, text, _) = drive("length 10\nlower\nsymbols\ngenerate\nreset\n");

        assert!(!form.is_ready());
        assert!(!form.flags().any());
        assert!(text.trim_end().ends_with("(Generate)  [Reset]"));
    }

    #[test]
    fn copy_requires_password() {
        let (_, text, clipboard) = drive("copy\n");

        assert!(text.contains("No password has been generated yet"));
        assert!(clipboard.copied.is_empty());
    }

    #[test]
    fn copy_sends_current_password() {
        let (form, text, clipboard) = drive("length 6\nupper\ngenerate\ncopy\n");

        assert!(text.contains("Copied to clipboard."));
        assert_eq!(clipboard.copied, vec![form.password().unwrap().to_string()]);
    }
}
