use std::io::{self, Write};

use crate::config::Config;
use crate::error::ContactsError;
use crate::model::{ContactId, RandomIds};
use crate::store::ContactList;

pub struct CLIContext {
    pub contacts: ContactList,
    pub ids: RandomIds,
    pub config: Config,
}

impl CLIContext {
    pub fn new(config: Config) -> Self {
        Self {
            contacts: ContactList::new(),
            ids: RandomIds::from_entropy(),
            config,
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Ask until the answer is yes or no. EOF counts as no.
    pub fn confirm(&self, prompt: &str) -> bool {
        loop {
            match self.prompt(prompt).map(|s| s.to_lowercase()) {
                Some(a) if a == "yes" || a == "y" => return true,
                Some(a) if a == "no" || a == "n" => return false,
                Some(_) => println!("Please answer yes or no."),
                None => return false,
            }
        }
    }

    /// Look up a contact ID from args or a prompt. Prints if unknown.
    pub fn find_contact_id(&self, args: &str) -> Option<ContactId> {
        let raw = if args.trim().is_empty() {
            self.prompt("Enter ID: ")?
        } else {
            args.trim().to_string()
        };
        let id = ContactId::from_raw(&raw);
        if self.contacts.find_by_id(&id).is_none() {
            println!("Invalid ID value '{}'. No record found.", id);
            return None;
        }
        Some(id)
    }

    /// Print an error.
    pub fn print_error(&self, e: &ContactsError) {
        println!("Error: {}", e);
    }
}
