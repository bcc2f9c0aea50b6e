//! ASCII banner with a vertical color gradient (BLINK).

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Electric Blue (#38bdf8).
const ELECTRIC_BLUE: (u8, u8, u8) = (0x38, 0xbd, 0xf8);
/// Signal Violet (#a78bfa).
const SIGNAL_VIOLET: (u8, u8, u8) = (0xa7, 0x8b, 0xfa);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner: "BLINK" in figlet ASCII with a gradient from
/// Electric Blue to Signal Violet, then version and tagline.
pub fn print_welcome() {
    let mut out = stdout();
    // figlet-rs ships the standard font under this (misspelled) constructor.
    let font = FIGfont::standard().expect("figlet standard font");
    let figure = font.convert("BLINK").expect("figlet convert BLINK");
    let art = figure.to_string();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(ELECTRIC_BLUE, SIGNAL_VIOLET, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: SIGNAL_VIOLET.0,
        g: SIGNAL_VIOLET.1,
        b: SIGNAL_VIOLET.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Image analysis from the terminal\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
