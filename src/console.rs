//! Line-oriented operator console: parses commands and renders the desk.
//!
//! Parsing and rendering are pure so both can be tested without a terminal;
//! the binary only shuttles lines between stdin, the session, and stdout.

#[cfg(test)]
#[path = "console_test.rs"]
mod console_test;

use std::fmt::Write as _;

use crate::desk::{ArticleDesk, Intent};
use crate::state::collection::CollectionStore;
use crate::state::draft::DraftField;

pub const HELP: &str = "\
commands:
  search <text>        filter by title (empty text lists everything)
  refresh              re-fetch the current filter
  new | close          open or hide the new-article form
  title|image|date <v> edit a draft field
  publish              create the article from the draft
  reset                clear the draft (asks first)
  block <id>           toggle published/unpublished (asks first)
  delete <id>          delete an article (asks first)
  confirm | cancel     answer the pending question (also yes/no)
  show                 print the current view
  help                 this text
  quit                 leave";

/// A parsed console line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleCommand {
    Intent(Intent),
    Show,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{0}' needs an article id")]
    MissingId(&'static str),

    #[error("no article with id {0} in the current list")]
    UnknownArticle(String),
}

/// Parse one console line. Article ids are resolved against `collection`.
///
/// # Errors
///
/// Returns a [`ConsoleError`] for blank lines, unknown verbs, and ids that
/// are missing or not in the current list.
pub fn parse_line(line: &str, collection: &CollectionStore) -> Result<ConsoleCommand, ConsoleError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ConsoleError::Empty);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let intent = match verb.to_ascii_lowercase().as_str() {
        "search" | "find" => Intent::Search(rest.to_owned()),
        "refresh" => Intent::Refresh,
        "new" | "add" => Intent::OpenForm,
        "close" => Intent::CloseForm,
        "title" => Intent::Edit(DraftField::Title, rest.to_owned()),
        "image" => Intent::Edit(DraftField::Image, rest.to_owned()),
        "date" => Intent::Edit(DraftField::Date, rest.to_owned()),
        "publish" => Intent::Publish,
        "reset" => Intent::RequestReset,
        "block" => Intent::SelectBlock(resolve_id("block", rest, collection)?),
        "delete" => Intent::SelectDelete(resolve_id("delete", rest, collection)?),
        "confirm" | "yes" | "y" => Intent::Confirm,
        "cancel" | "no" | "n" => Intent::Cancel,
        "show" | "ls" => return Ok(ConsoleCommand::Show),
        "help" | "?" => return Ok(ConsoleCommand::Help),
        "quit" | "exit" | "q" => return Ok(ConsoleCommand::Quit),
        _ => return Err(ConsoleError::UnknownCommand(verb.to_owned())),
    };
    Ok(ConsoleCommand::Intent(intent))
}

fn resolve_id(
    verb: &'static str,
    token: &str,
    collection: &CollectionStore,
) -> Result<crate::net::types::ArticleId, ConsoleError> {
    if token.is_empty() {
        return Err(ConsoleError::MissingId(verb));
    }
    collection
        .resolve(token)
        .map(|article| article.id.clone())
        .ok_or_else(|| ConsoleError::UnknownArticle(token.to_owned()))
}

const HEADERS: [&str; 6] = ["#", "ID", "Title", "Image", "Creation Date", "Status"];

/// Render the article table only.
#[must_use]
pub fn render_table(collection: &CollectionStore) -> String {
    let rows: Vec<[String; 6]> = collection
        .articles()
        .iter()
        .enumerate()
        .map(|(index, article)| {
            [
                (index + 1).to_string(),
                article.id.to_string(),
                article.title.clone(),
                article.image.clone(),
                article.date.clone(),
                article.status.label().to_owned(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_owned), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    if rows.is_empty() {
        out.push_str("(no articles)\n");
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

/// Render the whole view: filter, table, open form, pending question.
#[must_use]
pub fn render(desk: &ArticleDesk) -> String {
    let mut out = String::new();
    let collection = desk.collection();
    if collection.query().is_empty() {
        out.push_str("Articles (all)\n");
    } else {
        let _ = writeln!(out, "Articles matching \"{}\"", collection.query());
    }
    out.push_str(&render_table(collection));

    let form = desk.form();
    if form.visible {
        out.push_str("\nAdd new article\n");
        let _ = writeln!(out, "  title: {}", form.draft.title);
        let _ = writeln!(out, "  image: {}", form.draft.image);
        let _ = writeln!(out, "  date:  {}", form.draft.date);
        if form.error.is_some() {
            let _ = writeln!(out, "  error: {}", form.error_message());
        }
    }

    if let Some(prompt) = desk.gate().prompt() {
        let _ = writeln!(out, "\nConfirmation: {prompt} [confirm/cancel]");
    }
    out
}
