//! Embedded page templates.
//!
//! Templates are compiled into the binary and registered on a fresh Tera
//! instance at startup, so the server needs no template directory at
//! runtime.

use tera::Tera;

const INDEX: &str = include_str!("../templates/index.html");
const QUIZ: &str = include_str!("../templates/quiz.html");
const ERROR: &str = include_str!("../templates/error.html");

pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates([
        ("index.html", INDEX),
        ("quiz.html", QUIZ),
        ("error.html", ERROR),
    ])?;
    Ok(tera)
}
