//! REPL command parsing and snapshot rendering.

use std::sync::Arc;

use tokio::runtime::Runtime;

use docsearch_core::{SearchRequest, REQUEST_FIELDS};
use docsearch_executor::SearchExecutor;
use docsearch_store::{SessionSnapshot, SessionStore};

const HELP: &str = "\
Commands:
  search <name>=<value> ...   run a search (needs at least docId or source)
  show                        render the current session state
  toggle <docId>              flip the access flag of a result row
  view <docId>                print the row's image reference
  folder <docId>              print the row's folder path
  fields                      list recognized search field names
  help                        this text
  quit                        leave";

/// One parsed REPL command.
#[derive(Debug)]
pub enum ReplCommand {
    Search(SearchRequest),
    Show,
    Toggle(String),
    View(String),
    Folder(String),
    Fields,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse an input line. Errors are user-facing messages.
    pub fn parse(line: &str) -> Result<Self, String> {
        let words = shlex::split(line).ok_or_else(|| "Unbalanced quoting.".to_string())?;
        let Some((command, args)) = words.split_first() else {
            return Err(HELP.to_string());
        };
        match (command.as_str(), args) {
            ("search", args) => {
                let mut request = SearchRequest::new();
                for pair in args {
                    let Some((name, value)) = pair.split_once('=') else {
                        return Err(format!("Expected <name>=<value>, got '{pair}'."));
                    };
                    if !request.set_field(name, value) {
                        return Err(format!(
                            "Unknown field '{name}'. Try 'fields' for the recognized names."
                        ));
                    }
                }
                Ok(ReplCommand::Search(request))
            }
            ("show", []) => Ok(ReplCommand::Show),
            ("toggle", [doc_id]) => Ok(ReplCommand::Toggle(doc_id.clone())),
            ("view", [doc_id]) => Ok(ReplCommand::View(doc_id.clone())),
            ("folder", [doc_id]) => Ok(ReplCommand::Folder(doc_id.clone())),
            ("toggle" | "view" | "folder", _) => {
                Err(format!("Usage: {command} <docId>"))
            }
            ("fields", []) => Ok(ReplCommand::Fields),
            ("help", _) => Ok(ReplCommand::Help),
            ("quit" | "exit", _) => Ok(ReplCommand::Quit),
            (other, _) => Err(format!("Unknown command '{other}'. Try 'help'.")),
        }
    }
}

/// Execute one command against the session.
pub fn run(runtime: &Runtime, store: &Arc<SessionStore>, executor: &SearchExecutor, command: ReplCommand) {
    match command {
        ReplCommand::Search(request) => {
            match runtime.block_on(executor.execute(request)) {
                Ok(()) => print_snapshot(&store.snapshot()),
                Err(err) => println!("{err}"),
            }
        }
        ReplCommand::Show => print_snapshot(&store.snapshot()),
        ReplCommand::Toggle(doc_id) => {
            if store.toggle_access(&doc_id) {
                print_snapshot(&store.snapshot());
            } else {
                println!("No result row with doc id '{doc_id}'.");
            }
        }
        ReplCommand::View(doc_id) => match store.snapshot().result(&doc_id) {
            Some(row) if !row.image_url.is_empty() => println!("{}", row.image_url),
            Some(_) => println!("Row '{doc_id}' has no image reference."),
            None => println!("No result row with doc id '{doc_id}'."),
        },
        ReplCommand::Folder(doc_id) => match store.snapshot().result(&doc_id) {
            Some(row) if !row.file_path.is_empty() => println!("{}", row.file_path),
            Some(_) => println!("Row '{doc_id}' has no folder path."),
            None => println!("No result row with doc id '{doc_id}'."),
        },
        ReplCommand::Fields => {
            for name in REQUEST_FIELDS {
                println!("{name}");
            }
        }
        ReplCommand::Help => println!("{HELP}"),
        ReplCommand::Quit => {}
    }
}

fn print_snapshot(snapshot: &SessionSnapshot) {
    if snapshot.loading {
        println!("(searching...)");
        return;
    }
    if let Some(error) = &snapshot.error {
        println!("error: {error}");
    }
    if snapshot.results.is_empty() {
        if snapshot.error.is_none() {
            println!("No results found.");
        }
        return;
    }
    println!(
        "{:<12} {:<10} {:<10} {:<10} {:<20} {:<12} {:<8}",
        "DOC ID", "SOURCE", "A NUMBER", "C NUMBER", "NAME", "FOLDER", "ACCESS"
    );
    for row in &snapshot.results {
        let name = [&row.first_name, &row.middle_name, &row.last_name]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{:<12} {:<10} {:<10} {:<10} {:<20} {:<12} {:<8}",
            row.doc_id,
            row.source,
            row.a_number,
            row.c_number,
            name,
            row.folder_name,
            if row.access { "yes" } else { "no" }
        );
    }
}
