//! Plain crossterm drawing of the header, login card and home page.

use std::io::{self, Write};

use crossterm::{
    cursor::{MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use loginform::prelude::*;

use crate::app::{Focus, LoginApp, LoginPage};

const LEFT: u16 = 4;
const LABEL_WIDTH: u16 = 10;
const INPUT_WIDTH: usize = 32;

pub fn render(out: &mut impl Write, app: &LoginApp) -> io::Result<()> {
    header(out, app.session())?;
    match app.page() {
        Some(page) => login(out, page),
        None => home(out),
    }
}

fn header(out: &mut impl Write, session: &Session) -> io::Result<()> {
    queue!(
        out,
        MoveTo(1, 0),
        SetAttribute(Attribute::Bold),
        SetForegroundColor(Color::Magenta),
        Print("A Typical Page"),
        ResetColor,
        SetAttribute(Attribute::Reset),
    )?;
    let hint = if session.is_authenticated() {
        "Ctrl+L logout  Esc quit"
    } else {
        "Tab next field  Enter login  Esc quit"
    };
    queue!(out, MoveTo(24, 0), SetForegroundColor(Color::DarkGrey), Print(hint), ResetColor)
}

fn login(out: &mut impl Write, page: &LoginPage) -> io::Result<()> {
    let mut row = 3;
    let mut cursor = None;

    for id in [FieldId::Email, FieldId::Password] {
        let input = page.input(id);
        let invalid = !page.form.field(id).is_valid();
        let focused = page.focus == Focus::Field(id);
        let color = if invalid { Color::Red } else { Color::Reset };

        queue!(
            out,
            MoveTo(LEFT, row),
            SetForegroundColor(color),
            SetAttribute(if focused { Attribute::Bold } else { Attribute::NormalIntensity }),
            Print(id.label()),
            SetAttribute(Attribute::Reset),
            MoveTo(LEFT + LABEL_WIDTH, row),
            Print("["),
            Print(format!("{:<width$}", input.display(), width = INPUT_WIDTH)),
            Print("]"),
            ResetColor,
        )?;

        if focused {
            let column = input.cursor_column().min(INPUT_WIDTH) as u16;
            cursor = Some((LEFT + LABEL_WIDTH + 1 + column, row));
        }
        row += 2;
    }

    let enabled = page.form.submit_enabled();
    let focused = page.focus == Focus::Submit;
    queue!(out, MoveTo(LEFT + LABEL_WIDTH, row))?;
    if enabled {
        queue!(out, SetForegroundColor(Color::Green), SetAttribute(Attribute::Bold))?;
    } else {
        queue!(out, SetForegroundColor(Color::DarkGrey), SetAttribute(Attribute::Dim))?;
    }
    if focused {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    queue!(out, Print("[ Login ]"), SetAttribute(Attribute::Reset), ResetColor)?;

    if page.rejected && !enabled {
        queue!(
            out,
            MoveTo(LEFT + LABEL_WIDTH + 11, row),
            SetForegroundColor(Color::DarkGrey),
            Print("disabled until the form is valid"),
            ResetColor,
        )?;
    }

    if let Some((x, y)) = cursor {
        queue!(out, MoveTo(x, y), Show)?;
    }
    Ok(())
}

fn home(out: &mut impl Write) -> io::Result<()> {
    queue!(
        out,
        MoveTo(LEFT, 3),
        SetAttribute(Attribute::Bold),
        Print("Welcome back!"),
        SetAttribute(Attribute::Reset),
    )
}
