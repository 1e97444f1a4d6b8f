use std::process::ExitCode;

use clap::{Parser, Subcommand};
use luach_rs::{
    hebrew::anchor::Postponement,
    options::{AdarNaming, ImpreciseDatePreference},
    GregorianDate, HebrewDate, HebrewDateValue, HebrewYear, LuachResult, MoladOffset,
};

macro_rules! format_line(
    ($a:expr, $b:expr, $c: expr, $d: expr) => {
        println!("{:<12} {:<6} {:<8} {}", $a, $b, $c, $d)
    };
    ($a:expr, $b:expr) => {
        println!("{:<14} {}", $a, $b)
    };
);

/// Inspect Hebrew and Gregorian calendar conversions.
#[derive(Parser)]
#[command(name = "luach-inspect", version)]
struct Cli {
    /// How to name the two Adars of a leap year: `letters` or `numerals`.
    #[arg(long, global = true, default_value = "letters")]
    naming: AdarNaming,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Hebrew date (month 1 is Tishrei, 13 is Elul) to Gregorian.
    H2g { year: i32, month: u8, day: u8 },
    /// Convert a Gregorian date to Hebrew.
    G2h { year: i32, month: u8, day: u8 },
    /// Print the molad, postponement and month table of a Hebrew year.
    Year { year: i32 },
    /// Resolve a GEDCOM Hebrew date value, e.g. "BET TMZ 5776 AND AAV 5776".
    Gedcom {
        date: String,
        /// `precise`, `earliest`, `latest` or `midpoint`.
        #[arg(default_value = "precise")]
        preference: ImpreciseDatePreference,
    },
    /// Print today's date (UTC) in both calendars.
    Today,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let naming = cli.naming;

    let result = match cli.command {
        Command::H2g { year, month, day } => h2g(year, month, day, naming),
        Command::G2h { year, month, day } => g2h(year, month, day, naming),
        Command::Year { year } => year_table(year, naming),
        Command::Gedcom { date, preference } => gedcom(&date, preference, naming),
        Command::Today => today(naming),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn h2g(year: i32, month: u8, day: u8, naming: AdarNaming) -> LuachResult<()> {
    let hebrew = HebrewDate::try_new(year, month, day)?;
    print_pair(&hebrew, &hebrew.to_gregorian(), naming, false);
    Ok(())
}

fn g2h(year: i32, month: u8, day: u8, naming: AdarNaming) -> LuachResult<()> {
    let gregorian = GregorianDate::try_new(year, month, day)?;
    print_pair(&gregorian.to_hebrew()?, &gregorian, naming, true);
    Ok(())
}

fn today(naming: AdarNaming) -> LuachResult<()> {
    let gregorian = GregorianDate::today_utc()?;
    print_pair(&gregorian.to_hebrew()?, &gregorian, naming, true);
    Ok(())
}

fn print_pair(hebrew: &HebrewDate, gregorian: &GregorianDate, naming: AdarNaming, reverse: bool) {
    let hebrew = hebrew.display_name(naming);
    let gregorian = gregorian.to_legacy_weekday_string();
    if reverse {
        println!("{gregorian} -> {hebrew}");
    } else {
        println!("{hebrew} -> {gregorian}");
    }
}

fn year_table(year: i32, naming: AdarNaming) -> LuachResult<()> {
    let hebrew_year = HebrewYear::try_new(year)?;
    let molad = MoladOffset::for_year(year);

    format_line!("Year", year);
    format_line!("Leap", hebrew_year.is_leap());
    format_line!("Length", hebrew_year.length());
    format_line!("Kind", hebrew_year.kind()?);
    format_line!(
        "Molad",
        format!(
            "day {} {}h {}p",
            molad.day_of_week(),
            molad.hours,
            molad.chalakim
        )
    );
    format_line!("Postponement", format!("{:?}", Postponement::for_year(year, &molad)));
    format_line!("1 Tishrei", hebrew_year.new_year().to_legacy_weekday_string());
    println!();

    format_line!("Month", "Code", "Length", "Starts");
    for month in hebrew_year.months() {
        let code = month
            .month_code(hebrew_year.is_leap())
            .map(|code| code.to_string())
            .unwrap_or_default();
        let length = hebrew_year.month_length(month).unwrap_or_default();
        let start = hebrew_year
            .month_start(month)
            .map(|date| date.to_string())
            .unwrap_or_default();
        format_line!(
            month.name(hebrew_year.is_leap(), naming),
            code,
            length,
            start
        );
    }
    Ok(())
}

fn gedcom(date: &str, preference: ImpreciseDatePreference, naming: AdarNaming) -> LuachResult<()> {
    let value: HebrewDateValue = date.parse()?;
    let hebrew = value.resolve(preference)?;
    println!(
        "{value} ({preference}) -> {} -> {}",
        hebrew.display_name(naming),
        hebrew.to_gregorian().to_legacy_weekday_string()
    );
    Ok(())
}
