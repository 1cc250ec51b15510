use std::path::{Path, PathBuf};

use crate::cli::context::CLIContext;
use crate::error::ContactsError;
use crate::export;
use crate::import;
use crate::model::{Contact, Field, FieldUpdate};
use crate::ops::contact_ops;

pub fn list(ctx: &CLIContext) {
    if ctx.contacts.is_empty() {
        println!("No contacts yet. Use 'add' or 'import' to add some.");
        return;
    }

    println!("Contacts ({}):", ctx.contacts.len());
    println!();
    print_row(&import::header_columns());
    print_row(&["----"; 8]);
    for contact in &ctx.contacts {
        print_row(&contact.to_row());
    }
}

fn print_row(cells: &[&str]) {
    println!(
        "{:<5} {:<15} {:<15} {:<15} {:<25} {:<30} {:<30} {:<30}",
        cells[0], cells[1], cells[2], cells[3], cells[4], cells[5], cells[6], cells[7]
    );
}

pub fn add(ctx: &mut CLIContext) {
    println!("Adding a new contact (COMPANY, TITLE, PHONE_NUMBER and EMAIL may be left empty)");
    println!();

    let mut values = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        match ctx.read_line(&format!("{}: ", field)) {
            Some(v) => values.push(v),
            None => return,
        }
    }

    let max_attempts = ctx.config.ids.max_attempts;
    match contact_ops::add_contact(&mut ctx.contacts, values.as_slice(), &mut ctx.ids, max_attempts) {
        Ok(c) => println!("Successfully added contact {} ({} {}).", c.id, c.first_name, c.last_name),
        Err(e) => print_failure(ctx, &e),
    }
}

pub fn edit(ctx: &mut CLIContext, args: &str) {
    let id = match ctx.find_contact_id(args) {
        Some(id) => id,
        None => return,
    };
    let current = match ctx.contacts.find_by_id(&id) {
        Some(c) => c.clone(),
        None => return,
    };

    println!("Which field do you want to update? Use ALL to go through every field.");
    println!("Leaving a value empty keeps the current value.");
    let options: Vec<&str> = Field::ALL.iter().map(|f| f.column_name()).collect();
    println!("Options: {}, ALL", options.join(", "));

    let choice = match ctx.prompt("FIELD: ") {
        Some(s) => s,
        None => return,
    };
    let fields: Vec<Field> = if choice.eq_ignore_ascii_case("all") {
        Field::ALL.to_vec()
    } else {
        match Field::from_column_name(&choice) {
            Some(f) => vec![f],
            None => {
                println!("Invalid column specified. Record not updated.");
                return;
            }
        }
    };

    let mut preview = current;
    let mut edits: Vec<(Field, String)> = Vec::new();
    for field in fields {
        println!("Current value for {}: {}", field, preview.get(field));
        let new_value = match ctx.read_line(&format!("New value for {}: ", field)) {
            Some(v) => v,
            None => return,
        };
        match preview.validate_field_update(field, &new_value) {
            FieldUpdate::Keep => {}
            FieldUpdate::Change => preview.set(field, &new_value),
            FieldUpdate::Rejected(e) => {
                println!("Error: {}", e);
                println!("Record not updated.");
                return;
            }
        }
        edits.push((field, new_value));
    }

    let edits: Vec<(Field, &str)> = edits.iter().map(|(f, v)| (*f, v.as_str())).collect();
    match contact_ops::edit_contact(&mut ctx.contacts, &id, &edits) {
        Ok(_) => println!("Successfully edited contact {}.", id),
        Err(e) => print_failure(ctx, &e),
    }
}

pub fn delete(ctx: &mut CLIContext, args: &str) {
    let id = match ctx.find_contact_id(args) {
        Some(id) => id,
        None => return,
    };

    if !ctx.confirm("Are you sure (yes/no)? ") {
        println!("Contact not deleted.");
        return;
    }

    match contact_ops::delete_contact(&mut ctx.contacts, &id) {
        Ok(c) => println!("Successfully deleted contact {} ({} {}).", c.id, c.first_name, c.last_name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn import(ctx: &mut CLIContext, args: &str) {
    println!("Importing replaces the current contacts with the contents of a .txt or .csv file.");
    if !ctx.confirm("Do you still want to proceed (yes/no)? ") {
        println!("No file imported.");
        return;
    }

    let path = if args.is_empty() {
        match ctx.prompt("Path of file to import: ") {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => {
                println!("No file imported.");
                return;
            }
        }
    } else {
        PathBuf::from(args)
    };

    load_file(ctx, &path);
}

/// Import `path` and replace the book with what it contains.
pub fn load_file(ctx: &mut CLIContext, path: &Path) {
    let max_attempts = ctx.config.ids.max_attempts;
    let report = match import::import_file(path, &mut ctx.ids, max_attempts) {
        Ok(r) => r,
        Err(e) => {
            ctx.print_error(&e);
            println!("No data has been imported.");
            return;
        }
    };

    for rejected in &report.rejected {
        println!(
            "Invalid number of fields ({}) on line {}. Data on this line not imported.",
            rejected.field_count, rejected.line_number
        );
    }
    for line_number in &report.unassigned {
        println!("No free contact ID left for line {}. Data on this line not imported.", line_number);
    }
    if report.duplicates_dropped > 0 {
        println!("Skipped {} repeated line(s).", report.duplicates_dropped);
    }

    let strict = ctx.config.import.strict;
    let admission = contact_ops::admit_import(&mut ctx.contacts, report.contacts, strict);
    for (contact, e) in &admission.rejected {
        println!("Not imported: {} ({})", summary(contact), e);
    }
    println!("Loaded {} contacts from {}.", admission.admitted, path.display());
}

pub fn export(ctx: &CLIContext) {
    let export_cfg = &ctx.config.export;
    match export::export_to_dir(&export_cfg.directory, &export_cfg.prefix, ctx.contacts.as_slice()) {
        Ok(path) => println!("Filename: {} created!", path.display()),
        Err(e) => ctx.print_error(&e),
    }
}

fn print_failure(ctx: &CLIContext, e: &ContactsError) {
    match e {
        ContactsError::Invalid(reasons) => {
            for reason in reasons {
                println!("Error: {}", reason);
            }
        }
        other => ctx.print_error(other),
    }
}

fn summary(contact: &Contact) -> String {
    format!("{} {} {}", contact.id, contact.first_name, contact.last_name)
}
