pub mod context;
pub mod contact_commands;

use std::path::Path;

use context::CLIContext;

/// Run the interactive REPL over `ctx`, loading `initial_import` first if given.
pub fn run(mut ctx: CLIContext, initial_import: Option<&Path>) {
    println!("Contact List Manager");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    if let Some(path) = initial_import {
        contact_commands::load_file(&mut ctx, path);
        contact_commands::list(&ctx);
    }

    repl_loop(&mut ctx);
    println!("Goodbye.");
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command.to_lowercase().as_str() {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" | "done" => break,

            "list" | "ls" => contact_commands::list(ctx),
            "add" => contact_commands::add(ctx),
            "edit" => contact_commands::edit(ctx, args),
            "delete" | "rm" => contact_commands::delete(ctx, args),
            "import" => contact_commands::import(ctx, args),
            "export" => contact_commands::export(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into command and args.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

    list                    List all contacts
    add                     Add a contact (prompts for each field)
    edit [id]               Edit one field, or ALL fields, of a contact
    delete [id]             Delete a contact (asks for confirmation)
    import [path]           Replace the list with a .txt or .csv file
    export                  Write the list to a timestamped file
    help                    Show this help
    exit / quit / q         Exit

FIELDS:
    FIRST_NAME, LAST_NAME and RELATIONSHIP are required.
    Every value must be shorter than 30 characters.
    PHONE_NUMBER must look like 123-456-7890.
    EMAIL must contain '@' and '.'.
    RELATIONSHIP is one of FAMILY, FRIEND, SUPERVISOR, COLLEAGUE,
    FORMER SUPERVISOR, FORMER COLLEAGUE.

FILE FORMAT:
    [ID,]FIRST_NAME,LAST_NAME,PHONE_NUMBER,EMAIL,COMPANY,TITLE,RELATIONSHIP
    Rows without an ID get one between 1 and 1000 when imported."#);
}
