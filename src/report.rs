use std::io::{self, IsTerminal, Write};

use yansi::{Paint, Painted};

use crate::bio::{self, AminoAcid};

// Only paint when a human is looking at a terminal that understands ANSI codes.
pub fn configure_color(no_color: bool) {
    let enabled =
        !no_color && io::stdout().is_terminal() && anstyle_query::term_supports_ansi_color();
    if !enabled {
        yansi::disable();
    }
}

fn yes_no(flag: bool) -> Painted<&'static str> {
    if flag { "Yes".green() } else { "No".red() }
}

/// Print every attribute of a record on its own line, optional fields only when known.
pub fn write_record<W: Write>(out: &mut W, aa: &AminoAcid) -> io::Result<()> {
    writeln!(out, "{}: {}", "One-letter".bold(), aa.one_letter)?;
    writeln!(out, "{}: {}", "Three-letter".bold(), aa.three_letter)?;
    writeln!(out, "{}: {}", "Full name".bold(), aa.full_name)?;
    writeln!(out, "{}: {}", "Essential".bold(), yes_no(aa.essential))?;
    writeln!(
        out,
        "{}: {}",
        "Conditionally essential".bold(),
        yes_no(aa.conditionally_essential)
    )?;
    if let Some(grams) = aa.daily_requirement_g {
        writeln!(out, "{}: {grams} g", "Daily requirement".bold())?;
    }
    if let Some(percent) = aa.human_body_percentage {
        writeln!(out, "{}: {percent} %", "Share of body mass".bold())?;
    }
    Ok(())
}

// One line per registry entry, then the summed body share.
pub fn write_table<W: Write>(out: &mut W) -> io::Result<()> {
    for aa in bio::all() {
        let marker = if aa.essential {
            "essential".green()
        } else if aa.conditionally_essential {
            "conditionally essential".yellow()
        } else {
            Painted::new("")
        };
        let line = format!(
            "{}  {}  {:<14} {}",
            aa.one_letter.bold(),
            aa.three_letter,
            aa.full_name,
            marker
        );
        writeln!(out, "{}", line.trim_end())?;
    }
    writeln!(
        out,
        "{}: {:.1} %",
        "Total share of body mass".bold(),
        bio::total_human_body_percentage()
    )
}
