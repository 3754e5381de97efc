use std::io::{ self, Write };

use clap::builder::BoolishValueParser;
use clap::{ ArgAction, Args as ClapArgs, Parser, Subcommand };

use crate::clipboard::{ Clipboard, SystemClipboard };
use crate::errors::AppError;
use crate::form::PasswordForm;
use crate::generators::CharClass;
use crate::password::{ PasswordReport, RngTier };
use crate::screen;

#[derive(Parser, Debug)]
#[command(name = "genpass", author, version, about = "Random password generator with a validated form", long_about = None)]
pub struct Args {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Draw from a cryptographically secure RNG instead of the fast default
    #[arg(long, env = "GENPASS_SECURE", global = true, value_parser = BoolishValueParser::new())]
    pub secure: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in the form once and print the password
    Generate(GenerateArgs),
    /// Interactive form on the terminal
    Form,
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Password length (4 to 16)
    #[arg(short = 'L', long, allow_hyphen_values = true)]
    pub length: String,

    /// Include uppercase letters
    #[arg(short, long)]
    pub upper: bool,

    /// Include lowercase letters
    #[arg(short, long)]
    pub lower: bool,

    /// Include digits
    #[arg(short = 'n', long)]
    pub digits: bool,

    /// Include symbols
    #[arg(short, long)]
    pub symbols: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the password to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

impl Args {
    pub fn tier(&self) -> RngTier {
        if self.secure { RngTier::Secure } else { RngTier::Fast }
    }
}

pub fn run(args: Args) -> Result<(), AppError> {
    let tier = args.tier();
    let mut clipboard = SystemClipboard::default();

    match args.command {
        Command::Generate(generate) => {
            let stdout = io::stdout();
            run_generate(&generate, tier, &mut stdout.lock(), &mut clipboard)
        }
        Command::Form => {
            let mut form = PasswordForm::new(tier);
            log::info!("interactive form started ({:?} rng)", form.tier());
            let stdin = io::stdin();
            let stdout = io::stdout();
            screen::run(&mut form, stdin.lock(), &mut stdout.lock(), &mut clipboard)
        }
    }
}

pub fn run_generate<W, C>(args: &GenerateArgs, tier: RngTier, out: &mut W, clipboard: &mut C) -> Result<(), AppError>
where
    W: Write,
    C: Clipboard,
{
    let mut form = PasswordForm::new(tier);
    form.set_length(&args.length);
    form.set_class(CharClass::Upper, args.upper);
    form.set_class(CharClass::Lower, args.lower);
    form.set_class(CharClass::Digits, args.digits);
    form.set_class(CharClass::Symbols, args.symbols);

    let flags = form.flags();
    let password = form.submit()?;

    if args.json {
        let report = PasswordReport::new(password, flags, tier);
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", password)?;
    }

    if args.copy {
        clipboard.copy(password.as_str())?;
    }

    Ok(())
}
